use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{
    common::{VideoSearchConfig, entities::app_errors::CoreError},
    video::ports::VideoSearchClient,
};

const WATCH_URL: &str = "https://www.youtube.com/watch";

/// YouTube Data API search client.
///
/// Without an API key every lookup reports "no video" and no request is sent.
#[derive(Debug, Clone)]
pub struct YoutubeVideoSearchClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> Result<String, CoreError> {
    let video_id = video_id.trim();
    if video_id.is_empty() {
        return Err(CoreError::ExternalServiceError(
            "Video search returned an empty video id".to_string(),
        ));
    }

    let mut url = Url::parse(WATCH_URL)
        .map_err(|e| CoreError::Configuration(format!("Invalid watch URL: {}", e)))?;
    url.query_pairs_mut().append_pair("v", video_id);

    Ok(url.into())
}

impl YoutubeVideoSearchClient {
    pub fn new(config: &VideoSearchConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CoreError::Configuration(format!("Failed to build YouTube HTTP client: {}", e))
            })?;

        let api_key = config
            .youtube_api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            api_key,
            base_url: config.youtube_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl VideoSearchClient for YoutubeVideoSearchClient {
    async fn search_top_video(&self, query: String) -> Result<Option<String>, CoreError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(None);
        };

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("q", query.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("YouTube API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Video search error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("YouTube API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Video search returned error: {}",
                status
            )));
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse YouTube response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse video search response: {}", e))
        })?;

        search
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.video_id)
            .map(|video_id| watch_url(&video_id))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(base_url: String, api_key: Option<&str>) -> YoutubeVideoSearchClient {
        YoutubeVideoSearchClient::new(&VideoSearchConfig {
            youtube_api_key: api_key.map(str::to_string),
            youtube_base_url: base_url,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ").unwrap(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert!(watch_url(" ").is_err());
    }

    #[tokio::test]
    async fn test_search_top_video_builds_watch_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Egg Fried Rice recipe"))
            .and(query_param("type", "video"))
            .and(query_param("maxResults", "1"))
            .and(query_param("key", "yt-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": { "kind": "youtube#video", "videoId": "abc123" } },
                    { "id": { "kind": "youtube#video", "videoId": "zzz999" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let link = client(server.uri(), Some("yt-key"))
            .search_top_video("Egg Fried Rice recipe".to_string())
            .await
            .unwrap();

        assert_eq!(link.as_deref(), Some("https://www.youtube.com/watch?v=abc123"));
    }

    #[tokio::test]
    async fn test_no_results_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let link = client(server.uri(), Some("yt-key"))
            .search_top_video("Nothing recipe".to_string())
            .await
            .unwrap();

        assert_eq!(link, None);
    }

    #[tokio::test]
    async fn test_quota_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let result = client(server.uri(), Some("yt-key"))
            .search_top_video("Soup recipe".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_missing_key_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let youtube = client(server.uri(), Some("  "));
        assert!(!youtube.is_enabled());

        let link = youtube
            .search_top_video("Soup recipe".to_string())
            .await
            .unwrap();

        assert_eq!(link, None);
    }
}
