use crate::coordinator::{Coordinator, CoordinatorHandle};
use crate::relay::SignalingService;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Shared state handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub signaling: SignalingService,
    pub coordinator: CoordinatorHandle,
}

impl AppState {
    /// Builds the relay and starts a coordinator that delivers through it.
    pub fn start(command_buffer: NonZeroUsize) -> Self {
        let signaling = SignalingService::new();
        let coordinator = Coordinator::spawn(Arc::new(signaling.clone()), command_buffer);

        Self {
            signaling,
            coordinator,
        }
    }
}
