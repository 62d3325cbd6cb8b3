use rendezvous_core::{Identity, RoomId};

/// Protocol state of one live connection. A disconnected connection has no
/// session at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Connected,
    Joined { room_id: RoomId, identity: Identity },
}

impl Session {
    pub fn room(&self) -> Option<&RoomId> {
        match self {
            Session::Connected => None,
            Session::Joined { room_id, .. } => Some(room_id),
        }
    }
}
