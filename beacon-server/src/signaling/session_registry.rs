use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use beacon_core::{ServerMessage, SessionId};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Tracks which sessions are currently connected and owns the outbound
/// channel for each one. Disconnect cleanup in the room directory scopes
/// itself to what this registry has seen.
pub struct SessionRegistry {
    sessions: DashMap<SessionId, mpsc::UnboundedSender<Message>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Records a session as connected. Overwriting an existing entry is safe.
    pub fn on_connect(&self, session: SessionId, tx: mpsc::UnboundedSender<Message>) {
        self.sessions.insert(session, tx);
    }

    pub fn on_disconnect(&self, session: &SessionId) {
        self.sessions.remove(session);
    }

    pub fn is_connected(&self, session: &SessionId) -> bool {
        self.sessions.contains_key(session)
    }

    pub fn send(&self, session: &SessionId, message: &ServerMessage) {
        if let Some(peer) = self.sessions.get(session) {
            match serde_json::to_string(message) {
                Ok(json) => {
                    if let Err(e) = peer.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", session, e);
                    }
                }
                Err(e) => error!("Failed to serialize outbound message: {}", e),
            }
        } else {
            warn!("Attempted to send signal to disconnected session {}", session);
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for SessionRegistry {
    async fn emit(&self, session: SessionId, message: ServerMessage) {
        self.send(&session, &message);
    }
}
