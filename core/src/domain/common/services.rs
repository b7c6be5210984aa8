use std::sync::Arc;

use crate::domain::{
    completion::ports::LLMClient, upload::ports::UploadStore, video::ports::VideoSearchClient,
};

/// Orchestrates the completion provider, the video provider and the
/// temporary upload store. Every domain service trait is implemented on it.
pub struct Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) video_client: Arc<VS>,
    pub(crate) upload_store: Arc<US>,
    pub(crate) enrichment_concurrency: usize,
}

impl<LLM, VS, US> Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    pub fn new(
        llm_client: LLM,
        video_client: VS,
        upload_store: US,
        enrichment_concurrency: usize,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            video_client: Arc::new(video_client),
            upload_store: Arc::new(upload_store),
            enrichment_concurrency: enrichment_concurrency.max(1),
        }
    }
}

impl<LLM, VS, US> Clone for Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            video_client: Arc::clone(&self.video_client),
            upload_store: Arc::clone(&self.upload_store),
            enrichment_concurrency: self.enrichment_concurrency,
        }
    }
}
