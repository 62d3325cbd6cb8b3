use rendezvous_core::{ConnectionId, Identity};
use std::collections::HashMap;

/// Bidirectional identity <-> connection map.
///
/// Both directions are kept exact inverses of each other: rebinding an
/// identity or a handle evicts the stale half of the previous pair.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    by_identity: HashMap<Identity, ConnectionId>,
    by_handle: HashMap<ConnectionId, Identity>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last writer wins for both the identity and the handle.
    pub fn bind(&mut self, identity: Identity, handle: ConnectionId) {
        if let Some(previous) = self.by_handle.remove(&handle) {
            if self.by_identity.get(&previous) == Some(&handle) {
                self.by_identity.remove(&previous);
            }
        }

        if let Some(previous) = self.by_identity.insert(identity.clone(), handle) {
            if previous != handle {
                self.by_handle.remove(&previous);
            }
        }

        self.by_handle.insert(handle, identity);
    }

    pub fn identity_of(&self, handle: &ConnectionId) -> Option<&Identity> {
        self.by_handle.get(handle)
    }

    pub fn handle_of(&self, identity: &str) -> Option<ConnectionId> {
        self.by_identity.get(identity).copied()
    }

    pub fn unbind(&mut self, handle: &ConnectionId) -> Option<Identity> {
        let identity = self.by_handle.remove(handle)?;
        if self.by_identity.get(&identity) == Some(handle) {
            self.by_identity.remove(&identity);
        }
        Some(identity)
    }

    pub fn len(&self) -> usize {
        self.by_handle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_handle.is_empty()
    }
}
