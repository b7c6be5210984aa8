use std::{path::PathBuf, time::Duration};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct PantryLensConfig {
    pub llm: LLMConfig,
    pub video: VideoSearchConfig,
    pub upload: UploadConfig,
    pub enrichment: EnrichmentConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CompletionProvider {
    #[default]
    OpenAi,
    Gemini,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: CompletionProvider,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub openai_max_tokens: u32,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct VideoSearchConfig {
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct EnrichmentConfig {
    /// Maximum number of video lookups in flight for a single response.
    pub concurrency: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self { concurrency: 4 }
    }
}
