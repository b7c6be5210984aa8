use std::path::Path;

use bytes::Bytes;
use tempfile::TempPath;
use tracing::{debug, warn};

use crate::domain::{common::entities::app_errors::CoreError, completion::entities::ImagePayload};

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// An image received from the client, still in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub data: Bytes,
    pub mime_type: String,
}

impl UploadedImage {
    pub fn new(data: Bytes, mime_type: Option<String>) -> Self {
        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string());

        Self { data, mime_type }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An upload persisted to temporary storage for the lifetime of one request.
///
/// The file is removed by [`StagedUpload::release`], or when the value is
/// dropped if the request exits before releasing it.
#[derive(Debug)]
pub struct StagedUpload {
    path: TempPath,
    mime_type: String,
}

impl StagedUpload {
    pub fn new(path: TempPath, mime_type: String) -> Self {
        Self { path, mime_type }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Reads the staged bytes back for the completion request.
    pub async fn read(&self) -> Result<ImagePayload, CoreError> {
        let data = tokio::fs::read(self.path()).await.map_err(|e| {
            tracing::error!(path = %self.path().display(), error = %e, "Failed to read staged upload");
            CoreError::UploadStorage(format!("Failed to read staged upload: {}", e))
        })?;

        Ok(ImagePayload::new(data, self.mime_type.clone()))
    }

    /// Deletes the staged file. A failure is logged and swallowed so that it
    /// never replaces the outcome the request already reached.
    pub fn release(self) {
        let path_text = self.path.display().to_string();
        match self.path.close() {
            Ok(()) => debug!(path = %path_text, "Released staged upload"),
            Err(e) => warn!(path = %path_text, error = %e, "Failed to delete staged upload"),
        }
    }
}
