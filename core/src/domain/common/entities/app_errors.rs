use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid provider response: {0}")]
    InvalidProviderResponse(String),

    #[error("Upload storage error: {0}")]
    UploadStorage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// True for errors caused by the caller rather than by an upstream or local failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }
}
