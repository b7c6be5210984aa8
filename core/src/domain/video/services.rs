use futures::{StreamExt, stream};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{recipe::entities::Dish, video::ports::VideoSearchClient};

pub const VIDEO_QUERY_SUFFIX: &str = "recipe";

pub fn video_query(dish_name: &str) -> String {
    format!("{} {}", dish_name, VIDEO_QUERY_SUFFIX)
}

/// Looks up a tutorial video for one dish.
///
/// Never fails: provider errors, empty results and malformed links all come
/// back as `None`.
pub async fn find_video<V: VideoSearchClient>(client: &V, dish_name: &str) -> Option<String> {
    let query = video_query(dish_name);

    match client.search_top_video(query.clone()).await {
        Ok(Some(link)) if Url::parse(&link).is_ok() => Some(link),
        Ok(Some(link)) => {
            warn!(query = %query, link = %link, "Discarding malformed video link");
            None
        }
        Ok(None) => {
            debug!(query = %query, "No video found");
            None
        }
        Err(e) => {
            warn!(query = %query, error = %e, "Video lookup failed");
            None
        }
    }
}

/// Attaches a video link to every dish, running at most `concurrency`
/// lookups at once. Dish order and every field other than `video` are kept.
pub async fn enrich_dishes<V: VideoSearchClient>(
    client: &V,
    dishes: Vec<Dish>,
    concurrency: usize,
) -> Vec<Dish> {
    stream::iter(dishes)
        .map(|mut dish| async move {
            dish.video = find_video(client, &dish.name).await;
            dish
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
