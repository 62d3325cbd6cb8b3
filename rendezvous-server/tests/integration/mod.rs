pub mod connection_tests;
pub mod multi_peer_tests;

use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::Level;

use rendezvous_server::{Coordinator, CoordinatorHandle};

use crate::utils::MockSignalRelay;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_coordinator() -> (CoordinatorHandle, MockSignalRelay) {
    let relay = MockSignalRelay::new();
    let coordinator = Coordinator::spawn(Arc::new(relay.clone()), NonZeroUsize::new(100).unwrap());
    (coordinator, relay)
}
