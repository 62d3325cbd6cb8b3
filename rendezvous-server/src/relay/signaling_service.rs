use crate::relay::SignalRelay;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use rendezvous_core::{ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

struct SignalingInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Handle -> outbound WebSocket queue table shared by all connections.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
            }),
        }
    }

    pub fn add_peer(&self, handle: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(handle, tx);
    }

    pub fn remove_peer(&self, handle: &ConnectionId) {
        self.inner.peers.remove(handle);
    }

    pub fn peer_count(&self) -> usize {
        self.inner.peers.len()
    }

    fn send_event(&self, handle: ConnectionId, event: &ServerEvent) {
        let Some(peer) = self.inner.peers.get(&handle) else {
            debug!("Dropping {} for disconnected peer {}", event.name(), handle);
            return;
        };

        match serde_json::to_string(event) {
            Ok(json) => {
                if let Err(e) = peer.send(Message::Text(json.into())) {
                    error!("Failed to queue WS message to {}: {:?}", handle, e);
                }
            }
            Err(e) => error!("Failed to serialize {}: {}", event.name(), e),
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalRelay for SignalingService {
    async fn forward(&self, to: ConnectionId, event: ServerEvent) {
        self.send_event(to, &event);
    }
}
