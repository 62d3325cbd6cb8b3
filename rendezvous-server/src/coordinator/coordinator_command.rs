use rendezvous_core::{ClientEvent, ConnectionId, Member, RoomId};
use tokio::sync::oneshot;

/// Everything the coordinator reacts to, in the order the transport saw it.
#[derive(Debug)]
pub enum CoordinatorCommand {
    /// A transport connection was established.
    Connect { handle: ConnectionId },

    /// A decoded frame from a connection.
    Event {
        handle: ConnectionId,
        event: ClientEvent,
    },

    /// The transport lost or closed the connection.
    Disconnect { handle: ConnectionId },

    /// Current membership of a room.
    MembersOf {
        room_id: RoomId,
        reply: oneshot::Sender<Vec<Member>>,
    },
}
