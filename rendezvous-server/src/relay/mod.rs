mod signal_relay;
mod signaling_service;

pub use signal_relay::*;
pub use signaling_service::*;
