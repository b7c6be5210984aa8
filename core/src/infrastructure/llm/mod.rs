pub mod completion_client;
pub mod gemini_client;
pub mod openai_client;

pub use completion_client::CompletionClient;
pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiLLMClient;
