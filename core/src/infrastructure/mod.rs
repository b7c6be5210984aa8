pub mod llm;
pub mod upload;
pub mod video;
