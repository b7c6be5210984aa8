use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::{json::parse_provider_json, ports::LLMClient},
    identification::{
        entities::IdentifyResult, ports::IdentificationService, prompts::identify_prompt,
        schema::get_identify_schema, value_objects::IdentifyObjectInput,
    },
    upload::{entities::StagedUpload, ports::UploadStore},
    video::ports::VideoSearchClient,
};

pub const NO_IMAGE_UPLOADED: &str = "No image uploaded";

impl<LLM, VS, US> Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    async fn identify_staged(&self, staged: &StagedUpload) -> Result<IdentifyResult, CoreError> {
        let image = staged.read().await?;
        let raw_response = self
            .llm_client
            .generate_with_image(identify_prompt(), image, get_identify_schema())
            .await?;

        parse_provider_json(&raw_response)
    }
}

impl<LLM, VS, US> IdentificationService for Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    #[instrument(skip_all, fields(size = input.image.data.len(), mime_type = %input.image.mime_type))]
    async fn identify_object(
        &self,
        input: IdentifyObjectInput,
    ) -> Result<IdentifyResult, CoreError> {
        if input.image.is_empty() {
            return Err(CoreError::InvalidInput(NO_IMAGE_UPLOADED.to_string()));
        }

        let staged = self.upload_store.stage(input.image).await?;
        let result = self.identify_staged(&staged).await;
        staged.release();

        let result = result?;
        info!(prediction = %result.prediction, "Object identified");

        Ok(result)
    }
}
