pub mod common;
pub mod completion;
pub mod identification;
pub mod recipe;
pub mod upload;
pub mod video;
