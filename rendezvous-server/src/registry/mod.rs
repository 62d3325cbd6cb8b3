mod identity_registry;
mod room_presence;

pub use identity_registry::*;
pub use room_presence::*;
