use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, completion::entities::ImagePayload};

/// LLM Client trait for calling multimodal completion providers.
///
/// Implementations return the provider's raw text answer; parsing it is the
/// caller's concern.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
