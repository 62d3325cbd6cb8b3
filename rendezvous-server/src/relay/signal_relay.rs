use async_trait::async_trait;
use rendezvous_core::{ConnectionId, Member, ServerEvent};

/// Outbound side of the transport, as seen by the coordinator.
///
/// Implementations only route by handle. Room membership is always supplied
/// by the caller, so the relay keeps no protocol state.
#[async_trait]
pub trait SignalRelay: Send + Sync {
    /// Deliver `event` to `to`. Unknown or closed handles are dropped silently.
    async fn forward(&self, to: ConnectionId, event: ServerEvent);

    /// Deliver `event` to every member of a room snapshot, skipping `exclude`.
    async fn broadcast(&self, members: &[Member], event: ServerEvent, exclude: Option<ConnectionId>) {
        for member in members {
            if Some(member.handle) == exclude {
                continue;
            }
            self.forward(member.handle, event.clone()).await;
        }
    }
}
