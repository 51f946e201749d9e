mod relay_service;
mod room_directory;

pub use relay_service::*;
pub use room_directory::*;
