use beacon_core::SessionId;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;

/// Authoritative mapping from room id to the set of member sessions.
///
/// A room exists iff its entry is present; entries are pruned the moment the
/// last member goes away, so presence always implies a non-empty member set.
/// Every mutation runs under the entry guard of the room it touches and
/// returns the snapshot the caller needs for notification fan-out, so nothing
/// is emitted while a shard lock is held.
pub struct RoomDirectory {
    rooms: DashMap<String, HashSet<SessionId>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Adds `session` to `room_id`, creating the room on first join.
    /// Re-joining is a no-op beyond ensuring membership. Returns the members
    /// that were already present.
    pub fn join(&self, room_id: &str, session: &SessionId) -> Vec<SessionId> {
        let mut members = self
            .rooms
            .entry(room_id.to_string())
            .or_insert_with(HashSet::new);

        let others = members
            .iter()
            .filter(|m| *m != session)
            .cloned()
            .collect();
        members.insert(session.clone());
        others
    }

    /// Removes `session` from `room_id` if present. Returns the remaining
    /// members when the room existed, `None` when it did not.
    pub fn leave(&self, room_id: &str, session: &SessionId) -> Option<Vec<SessionId>> {
        match self.rooms.entry(room_id.to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().remove(session);

                if occupied.get().is_empty() {
                    occupied.remove();
                    Some(Vec::new())
                } else {
                    Some(occupied.get().iter().cloned().collect())
                }
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Strips `session` from every room, pruning rooms left empty.
    pub fn purge_session(&self, session: &SessionId) {
        self.rooms.retain(|_, members| {
            members.remove(session);
            !members.is_empty()
        });
    }

    /// Current members of `room_id`, or `None` for an unknown room. Absence
    /// and emptiness are the same thing here.
    pub fn members(&self, room_id: &str) -> Option<Vec<SessionId>> {
        self.rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
    }

    pub fn contains_room(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomDirectory {
    fn default() -> Self {
        Self::new()
    }
}
