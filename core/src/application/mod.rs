use tracing::{info, warn};

use crate::{
    domain::common::{PantryLensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::CompletionClient, upload::LocalUploadStore, video::YoutubeVideoSearchClient,
    },
};

pub type PantryLensService = Service<CompletionClient, YoutubeVideoSearchClient, LocalUploadStore>;

/// Builds the service with the adapters selected by `config`.
pub fn create_service(config: PantryLensConfig) -> Result<PantryLensService, CoreError> {
    let llm_client = CompletionClient::from_config(&config.llm)?;
    let video_client = YoutubeVideoSearchClient::new(&config.video)?;
    let upload_store = LocalUploadStore::new(&config.upload.dir)?;

    info!(
        provider = ?llm_client.provider(),
        upload_dir = %upload_store.dir().display(),
        enrichment_concurrency = config.enrichment.concurrency,
        "Service configured"
    );
    if !video_client.is_enabled() {
        warn!("No video search API key configured, dishes will not get video links");
    }

    Ok(Service::new(
        llm_client,
        video_client,
        upload_store,
        config.enrichment.concurrency,
    ))
}
