pub mod entities;
pub mod json;
pub mod ports;

pub use entities::*;
pub use ports::*;
