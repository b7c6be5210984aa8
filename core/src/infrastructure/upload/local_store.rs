use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::TempPath;

use crate::domain::{
    common::entities::app_errors::CoreError,
    upload::{
        entities::{StagedUpload, UploadedImage},
        ports::UploadStore,
    },
};

/// Stages uploads as uniquely named files in a local directory.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    dir: PathBuf,
}

impl LocalUploadStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| {
            CoreError::Configuration(format!(
                "Failed to create upload directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn write_upload(dir: &Path, data: &[u8]) -> std::io::Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .tempfile_in(dir)?;
    file.write_all(data)?;
    file.flush()?;

    Ok(file.into_temp_path())
}

impl UploadStore for LocalUploadStore {
    async fn stage(&self, image: UploadedImage) -> Result<StagedUpload, CoreError> {
        let dir = self.dir.clone();
        let data = image.data;

        let path = tokio::task::spawn_blocking(move || write_upload(&dir, &data))
            .await
            .map_err(|e| CoreError::UploadStorage(format!("Upload task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to stage upload");
                CoreError::UploadStorage(format!("Failed to stage upload: {}", e))
            })?;

        tracing::debug!(path = %path.display(), "Staged upload");

        Ok(StagedUpload::new(path, image.mime_type))
    }
}
