mod connection;
mod event;
mod member;
mod room;

pub use connection::{ConnectionId, ParseConnectionIdError};
pub use event::{ClientEvent, ServerEvent};
pub use member::{Identity, Member};
pub use room::RoomId;
