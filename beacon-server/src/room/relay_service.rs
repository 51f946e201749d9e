use crate::room::RoomDirectory;
use crate::signaling::SignalingOutput;
use beacon_core::{RelayError, ServerMessage, SessionId};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Room membership lifecycle and message relay, one handler per inbound
/// event. Handlers mutate the directory inside its critical section, then
/// fan notifications out through the signaling output. All relay is
/// fire-and-forget.
pub struct RelayService {
    directory: RoomDirectory,
    output: Arc<dyn SignalingOutput>,
}

impl RelayService {
    pub fn new(output: Arc<dyn SignalingOutput>) -> Self {
        Self {
            directory: RoomDirectory::new(),
            output,
        }
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Adds the session to the room and tells every prior member about it.
    /// An empty room id is the one rejected input in the whole relay.
    pub async fn join_room(&self, session: &SessionId, room_id: &str) -> Result<(), RelayError> {
        if room_id.is_empty() {
            return Err(RelayError::InvalidRequest);
        }

        let others = self.directory.join(room_id, session);
        info!("Session {} joined room '{}'", session, room_id);

        for member in others {
            let msg = ServerMessage::UserJoined {
                user: session.clone(),
            };
            self.output.emit(member, msg).await;
        }

        Ok(())
    }

    /// Removes the session from the room and notifies the remaining members.
    /// Unknown rooms are a silent no-op so duplicate or late leaves are
    /// harmless.
    pub async fn leave_room(&self, session: &SessionId, room_id: &str) {
        let Some(remaining) = self.directory.leave(room_id, session) else {
            return;
        };
        info!("Session {} left room '{}'", session, room_id);

        for member in remaining {
            let msg = ServerMessage::UserLeft {
                user: session.clone(),
            };
            self.output.emit(member, msg).await;
        }
    }

    /// Purges the session from every room. No notifications on this path;
    /// only an explicit leave_room announces a departure.
    pub async fn disconnect(&self, session: &SessionId) {
        self.directory.purge_session(session);
        info!("Session {} purged from all rooms", session);
    }

    /// Relays an offer to every other member of the room. Unknown rooms are
    /// a silent no-op.
    pub async fn relay_offer(&self, session: &SessionId, room_id: &str, offer: Value) {
        let Some(members) = self.directory.members(room_id) else {
            return;
        };
        debug!("Relaying offer from {} to room '{}'", session, room_id);

        for member in members {
            if member == *session {
                continue;
            }
            let msg = ServerMessage::Offer {
                offer: offer.clone(),
                from: session.clone(),
            };
            self.output.emit(member, msg).await;
        }
    }

    /// Relays an answer to the named target only. The room gates the
    /// operation but the target is taken as-is, without a membership check.
    pub async fn relay_answer(
        &self,
        session: &SessionId,
        room_id: &str,
        answer: Value,
        target: &SessionId,
    ) {
        if !self.directory.contains_room(room_id) {
            return;
        }
        debug!("Relaying answer from {} to {}", session, target);

        let msg = ServerMessage::Answer {
            answer,
            from: session.clone(),
        };
        self.output.emit(target.clone(), msg).await;
    }

    /// Relays an ICE candidate to the named target only. Same rules as
    /// relay_answer.
    pub async fn relay_ice_candidate(
        &self,
        session: &SessionId,
        room_id: &str,
        candidate: Value,
        target: &SessionId,
    ) {
        if !self.directory.contains_room(room_id) {
            return;
        }
        debug!("Relaying ICE candidate from {} to {}", session, target);

        let msg = ServerMessage::IceCandidate {
            candidate,
            from: session.clone(),
        };
        self.output.emit(target.clone(), msg).await;
    }
}
