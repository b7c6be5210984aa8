use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, ValueEnum};
use pantrylens_core::domain::{
    common::{
        CompletionProvider, EnrichmentConfig, LLMConfig, PantryLensConfig, UploadConfig,
        VideoSearchConfig,
    },
    recipe::value_objects::DEFAULT_MAX_DISH_COUNT,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantrylens-api", version, about = "PantryLens recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub completion: CompletionArgs,

    #[command(flatten)]
    pub video: VideoArgs,

    #[command(flatten)]
    pub upload: UploadArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 5001)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Origins allowed by CORS. Only the local frontend by default.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Openai,
    Gemini,
}

impl From<ProviderArg> for CompletionProvider {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::Openai => CompletionProvider::OpenAi,
            ProviderArg::Gemini => CompletionProvider::Gemini,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct CompletionArgs {
    #[arg(long = "completion-provider", env = "COMPLETION_PROVIDER", value_enum, default_value_t = ProviderArg::Openai)]
    pub provider: ProviderArg,

    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 800)]
    pub openai_max_tokens: u32,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    #[arg(long = "completion-timeout-secs", env = "COMPLETION_TIMEOUT_SECS", default_value_t = 60)]
    pub completion_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VideoArgs {
    #[arg(long = "youtube-api-key", env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,

    #[arg(
        long = "youtube-base-url",
        env = "YOUTUBE_BASE_URL",
        default_value = "https://www.googleapis.com/youtube/v3"
    )]
    pub youtube_base_url: String,

    #[arg(long = "video-timeout-secs", env = "VIDEO_TIMEOUT_SECS", default_value_t = 10)]
    pub video_timeout_secs: u64,

    #[arg(long = "enrichment-concurrency", env = "ENRICHMENT_CONCURRENCY", default_value_t = 4)]
    pub enrichment_concurrency: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UploadArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub dir: PathBuf,

    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,

    #[arg(long = "max-dish-count", env = "MAX_DISH_COUNT", default_value_t = DEFAULT_MAX_DISH_COUNT)]
    pub max_dish_count: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for PantryLensConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                provider: args.completion.provider.into(),
                openai_api_key: args.completion.openai_api_key,
                openai_model: args.completion.openai_model,
                openai_base_url: args.completion.openai_base_url,
                openai_max_tokens: args.completion.openai_max_tokens,
                gemini_api_key: args.completion.gemini_api_key,
                gemini_model: args.completion.gemini_model,
                gemini_base_url: args.completion.gemini_base_url,
                timeout: Duration::from_secs(args.completion.completion_timeout_secs),
            },
            video: VideoSearchConfig {
                youtube_api_key: args.video.youtube_api_key,
                youtube_base_url: args.video.youtube_base_url,
                timeout: Duration::from_secs(args.video.video_timeout_secs),
            },
            upload: UploadConfig {
                dir: args.upload.dir,
            },
            enrichment: EnrichmentConfig {
                concurrency: args.video.enrichment_concurrency,
            },
        }
    }
}
