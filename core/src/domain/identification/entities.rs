use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the completion provider recognised as the main object of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentifyResult {
    pub prediction: String,
    pub confidence: String,
    pub alternatives: Vec<String>,
    pub summary: String,
}
