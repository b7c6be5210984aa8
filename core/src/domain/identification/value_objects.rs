use crate::domain::upload::entities::UploadedImage;

#[derive(Debug, Clone)]
pub struct IdentifyObjectInput {
    pub image: UploadedImage,
}
