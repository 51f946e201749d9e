use crate::model::session::SessionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound events, one variant per wire event name.
///
/// Room ids default to empty when the field is missing so the handlers, not
/// the codec, decide between a structured failure and a silent no-op. SDP and
/// candidate payloads are opaque JSON relayed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    JoinRoom {
        #[serde(default)]
        room_id: String,
    },
    LeaveRoom {
        #[serde(default)]
        room_id: String,
    },
    Offer {
        #[serde(default)]
        room_id: String,
        #[serde(default)]
        offer: Value,
    },
    Answer {
        #[serde(default)]
        room_id: String,
        #[serde(default)]
        answer: Value,
        target: Option<SessionId>,
    },
    IceCandidate {
        #[serde(default)]
        room_id: String,
        #[serde(default)]
        candidate: Value,
        target: Option<SessionId>,
    },
}

/// Outbound events delivered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sent once per connection so the client learns its own session id.
    Welcome { session: SessionId },
    /// Acknowledges a successful join_room.
    Joined { room_id: String },
    /// Structured failure reply for a rejected request.
    Error { message: String },
    UserJoined { user: SessionId },
    UserLeft { user: SessionId },
    Offer { offer: Value, from: SessionId },
    Answer { answer: Value, from: SessionId },
    IceCandidate { candidate: Value, from: SessionId },
}
