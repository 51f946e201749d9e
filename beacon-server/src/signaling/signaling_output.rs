use async_trait::async_trait;
use beacon_core::{ServerMessage, SessionId};

/// Outbound seam the relay emits through. Implemented by the WebSocket
/// session registry in production and by a capturing mock in tests.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver `message` to one session. Best effort, at most once; a dead
    /// or unknown session is not an error.
    async fn emit(&self, session: SessionId, message: ServerMessage);
}
