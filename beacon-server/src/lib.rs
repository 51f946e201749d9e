pub mod room;
pub mod server;
pub mod signaling;

pub use room::*;
pub use server::*;
pub use signaling::*;
