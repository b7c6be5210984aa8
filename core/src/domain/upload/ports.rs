use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    upload::entities::{StagedUpload, UploadedImage},
};

/// Temporary storage for uploads that live as long as one request.
#[cfg_attr(test, mockall::automock)]
pub trait UploadStore: Send + Sync {
    fn stage(
        &self,
        image: UploadedImage,
    ) -> impl Future<Output = Result<StagedUpload, CoreError>> + Send;
}
