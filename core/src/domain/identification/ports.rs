use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::{entities::IdentifyResult, value_objects::IdentifyObjectInput},
};

/// Service trait for object identification
#[cfg_attr(test, mockall::automock)]
pub trait IdentificationService: Send + Sync {
    fn identify_object(
        &self,
        input: IdentifyObjectInput,
    ) -> impl Future<Output = Result<IdentifyResult, CoreError>> + Send;
}
