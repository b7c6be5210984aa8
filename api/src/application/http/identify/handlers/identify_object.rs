use axum::extract::{Multipart, State, multipart::MultipartRejection};
use pantrylens_core::domain::identification::{
    entities::IdentifyResult, ports::IdentificationService, services::NO_IMAGE_UPLOADED,
    value_objects::IdentifyObjectInput,
};
use tracing::info;

use crate::application::http::{
    multipart::read_image_form,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const IDENTIFY_FAILED: &str = "Failed to process image";

#[utoipa::path(
    post,
    path = "/identify",
    tag = "identify",
    summary = "Identify the main object of a photo",
    description = "Sends the uploaded `image` to the completion provider and returns what it recognised.",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, body = IdentifyResult),
        (status = 400, description = "No image uploaded", body = ApiErrorResponse),
        (status = 500, description = "Provider or parse failure", body = ApiErrorResponse)
    ),
)]
pub async fn identify_object(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<IdentifyResult>, ApiError> {
    let form = read_image_form(multipart, state.args.upload.max_image_bytes).await?;
    let image = form
        .image
        .ok_or_else(|| ApiError::BadRequest(NO_IMAGE_UPLOADED.to_string()))?;

    info!(size = image.data.len(), mime_type = %image.mime_type, "Sending image to completion provider");

    let result = state
        .service
        .identify_object(IdentifyObjectInput { image })
        .await
        .map_err(|e| ApiError::from_core(e, IDENTIFY_FAILED))?;

    Ok(Response::OK(result))
}
