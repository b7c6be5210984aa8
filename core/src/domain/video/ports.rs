use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Video search provider used to attach a tutorial link to a dish.
#[cfg_attr(test, mockall::automock)]
pub trait VideoSearchClient: Send + Sync {
    /// Returns the canonical watch URL of the single top video result for
    /// `query`, or `None` when the provider has no match.
    fn search_top_video(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}
