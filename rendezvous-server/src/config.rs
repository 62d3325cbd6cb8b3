use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

const DEFAULT_COMMAND_BUFFER: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

/// Runtime settings, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "rendezvous", version, about = "WebRTC signaling relay")]
pub struct ServerConfig {
    /// Address to bind the HTTP/WebSocket listener to.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Depth of the coordinator's command queue.
    #[arg(long, env = "COMMAND_BUFFER", default_value_t = DEFAULT_COMMAND_BUFFER)]
    pub command_buffer: NonZeroUsize,

    /// Fallback log filter when RUST_LOG is unset.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            command_buffer: DEFAULT_COMMAND_BUFFER,
            log_level: "info".to_owned(),
        }
    }
}
