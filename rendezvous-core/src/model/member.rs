use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Display name (or email-like string) a participant supplies on join.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct Identity(pub String);

impl Identity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A connection present in a room, together with the identity it joined as.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct Member {
    pub identity: Identity,
    pub handle: ConnectionId,
}

impl Member {
    pub fn new(identity: impl Into<Identity>, handle: ConnectionId) -> Self {
        Self {
            identity: identity.into(),
            handle,
        }
    }
}
