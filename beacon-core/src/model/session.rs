use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Transport-level identifier for one connected participant. Assigned on
/// connection, opaque to clients, never reused while the connection lives.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
