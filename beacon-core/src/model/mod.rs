mod error;
mod message;
mod session;

pub use error::*;
pub use message::*;
pub use session::*;
