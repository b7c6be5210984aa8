pub mod health;
pub mod identify;
pub mod multipart;
pub mod recipe;
pub mod server;
