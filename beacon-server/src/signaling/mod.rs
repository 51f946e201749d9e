mod session_registry;
mod signaling_output;
mod ws_handler;

pub use session_registry::*;
pub use signaling_output::*;
pub use ws_handler::*;
