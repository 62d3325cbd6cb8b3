mod app_state;
mod health;
mod router;
mod ws_handler;

pub use app_state::*;
pub use health::*;
pub use router::*;
pub use ws_handler::*;
