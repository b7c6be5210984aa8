use crate::{
    domain::{
        common::{CompletionProvider, LLMConfig, entities::app_errors::CoreError},
        completion::{entities::ImagePayload, ports::LLMClient},
    },
    infrastructure::llm::{GeminiLLMClient, OpenAiLLMClient},
};

/// The completion provider picked at startup.
#[derive(Debug, Clone)]
pub enum CompletionClient {
    OpenAi(OpenAiLLMClient),
    Gemini(GeminiLLMClient),
}

fn require_key(key: Option<&String>, name: &str) -> Result<String, CoreError> {
    key.map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CoreError::Configuration(format!("{} is required", name)))
}

impl CompletionClient {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        match config.provider {
            CompletionProvider::OpenAi => Ok(Self::OpenAi(OpenAiLLMClient::new(
                require_key(config.openai_api_key.as_ref(), "OPENAI_API_KEY")?,
                config.openai_model.clone(),
                config.openai_base_url.clone(),
                config.openai_max_tokens,
                config.timeout,
            )?)),
            CompletionProvider::Gemini => Ok(Self::Gemini(GeminiLLMClient::new(
                require_key(config.gemini_api_key.as_ref(), "GEMINI_API_KEY")?,
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
                config.timeout,
            )?)),
        }
    }

    pub fn provider(&self) -> CompletionProvider {
        match self {
            Self::OpenAi(_) => CompletionProvider::OpenAi,
            Self::Gemini(_) => CompletionProvider::Gemini,
        }
    }
}

impl LLMClient for CompletionClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            Self::OpenAi(client) => {
                client
                    .generate_with_image(prompt, image, response_schema)
                    .await
            }
            Self::Gemini(client) => {
                client
                    .generate_with_image(prompt, image, response_schema)
                    .await
            }
        }
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            Self::OpenAi(client) => client.generate_with_text(prompt, response_schema).await,
            Self::Gemini(client) => client.generate_with_text(prompt, response_schema).await,
        }
    }
}
