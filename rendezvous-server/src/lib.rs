pub mod config;
pub mod coordinator;
pub mod registry;
pub mod relay;
pub mod transport;

pub use config::*;
pub use coordinator::*;
pub use registry::*;
pub use relay::*;
pub use transport::*;
