use std::collections::HashMap;

use axum::{
    extract::{
        Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use pantrylens_core::domain::upload::entities::UploadedImage;
use tracing::{debug, warn};

use crate::application::http::server::api_entities::api_error::ApiError;

pub const IMAGE_FIELD: &str = "image";

fn image_too_large(max_image_bytes: usize) -> ApiError {
    ApiError::BadRequest(format!(
        "Image too large. Max size is {} bytes",
        max_image_bytes
    ))
}

/// A body cut off by the request size limit reports the image size limit.
fn read_error(context: &str, error: MultipartError, max_image_bytes: usize) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(max_image_bytes, "Multipart body exceeds the size limit");
        return image_too_large(max_image_bytes);
    }

    warn!("{}: {}", context, error);
    ApiError::BadRequest(format!("{}: {}", context, error))
}

/// A multipart form carrying at most one image plus plain text fields.
#[derive(Debug, Default)]
pub struct ImageForm {
    pub image: Option<UploadedImage>,
    fields: HashMap<String, String>,
}

impl ImageForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Reads the request form. A body that is not multipart at all is treated as
/// an empty form so that the handler reports the missing image.
pub async fn read_image_form(
    multipart: Result<Multipart, MultipartRejection>,
    max_image_bytes: usize,
) -> Result<ImageForm, ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Request is not a multipart form");
            return Ok(ImageForm::default());
        }
    };

    let mut form = ImageForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error("Failed to read multipart field", e, max_image_bytes))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == IMAGE_FIELD {
            let mime_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| read_error("Failed to read image", e, max_image_bytes))?;

            if data.len() > max_image_bytes {
                return Err(image_too_large(max_image_bytes));
            }

            // An empty file part counts as no upload.
            if !data.is_empty() {
                form.image = Some(UploadedImage::new(data, mime_type));
            }
        } else {
            let value = field.text().await.map_err(|e| {
                read_error(&format!("Failed to read field {}", name), e, max_image_bytes)
            })?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
