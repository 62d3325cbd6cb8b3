use crate::coordinator::{CoordinatorCommand, CoordinatorHandle, Session};
use crate::registry::{IdentityRegistry, RoomPresence};
use crate::relay::SignalRelay;
use rendezvous_core::{ClientEvent, ConnectionId, Identity, Member, RoomId, ServerEvent};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns all presence state and runs the signaling protocol.
///
/// Commands are processed strictly one at a time, so a room's membership
/// snapshot and the mutation derived from it are never interleaved with
/// another join or leave.
pub struct Coordinator {
    identities: IdentityRegistry,
    presence: RoomPresence,
    sessions: HashMap<ConnectionId, Session>,
    relay: Arc<dyn SignalRelay>,
}

impl Coordinator {
    pub fn new(relay: Arc<dyn SignalRelay>) -> Self {
        Self {
            identities: IdentityRegistry::new(),
            presence: RoomPresence::new(),
            sessions: HashMap::new(),
            relay,
        }
    }

    /// Starts the coordinator on its own task and returns the queue feeding it.
    pub fn spawn(relay: Arc<dyn SignalRelay>, buffer: NonZeroUsize) -> CoordinatorHandle {
        let (tx, rx) = mpsc::channel(buffer.get());
        tokio::spawn(Self::new(relay).run(rx));
        CoordinatorHandle::new(tx)
    }

    pub async fn run(mut self, mut command_rx: mpsc::Receiver<CoordinatorCommand>) {
        info!("Coordinator event loop started");

        while let Some(cmd) = command_rx.recv().await {
            self.handle(cmd).await;
        }

        info!("Command channel closed. Coordinator event loop finished");
    }

    pub async fn handle(&mut self, cmd: CoordinatorCommand) {
        match cmd {
            CoordinatorCommand::Connect { handle } => self.on_connect(handle).await,
            CoordinatorCommand::Event { handle, event } => self.on_event(handle, event).await,
            CoordinatorCommand::Disconnect { handle } => self.on_disconnect(handle).await,
            CoordinatorCommand::MembersOf { room_id, reply } => {
                if reply.send(self.presence.members_of(room_id.as_str())).is_err() {
                    debug!("Members of {} requested but the caller went away", room_id);
                }
            }
        }
    }

    pub fn identities(&self) -> &IdentityRegistry {
        &self.identities
    }

    pub fn presence(&self) -> &RoomPresence {
        &self.presence
    }

    pub fn session(&self, handle: &ConnectionId) -> Option<&Session> {
        self.sessions.get(handle)
    }

    async fn on_connect(&mut self, handle: ConnectionId) {
        info!("A user connected: {}", handle);
        self.sessions.insert(handle, Session::Connected);
        self.relay.forward(handle, ServerEvent::Welcome { handle }).await;
    }

    async fn on_event(&mut self, handle: ConnectionId, event: ClientEvent) {
        let Some(joined) = self.sessions.get(&handle).map(|s| s.room().is_some()) else {
            warn!("Ignoring {} from unregistered connection {}", event.name(), handle);
            return;
        };

        match event {
            ClientEvent::JoinRoom { identity, room_id } => {
                self.on_join(handle, identity, room_id).await;
            }
            negotiation => {
                if !joined {
                    warn!(
                        "Ignoring {} from {}: connection has not joined a room",
                        negotiation.name(),
                        handle
                    );
                    return;
                }

                let name = negotiation.name();
                if let Some((to, relayed)) = negotiation.into_relayed(handle) {
                    debug!("Relaying {} from {} to {}", name, handle, to);
                    self.relay.forward(to, relayed).await;
                }
            }
        }
    }

    async fn on_join(
        &mut self,
        handle: ConnectionId,
        identity: Option<String>,
        room_id: Option<String>,
    ) {
        let (Some(identity), Some(room_id)) = (
            identity.filter(|s| !s.is_empty()),
            room_id.filter(|s| !s.is_empty()),
        ) else {
            warn!("Missing identity or roomId in join from {}", handle);
            return;
        };
        let identity = Identity::from(identity);
        let room_id = RoomId::from(room_id);

        if let Some(Session::Joined {
            room_id: previous_room,
            identity: previous_identity,
        }) = self.sessions.get(&handle).cloned()
        {
            info!(
                "User {} ({}) moves from room {} to room {}",
                previous_identity, handle, previous_room, room_id
            );
            self.leave_room(handle, &previous_room, previous_identity).await;
        }

        info!("User {} is joining room {}", identity, room_id);

        self.identities.bind(identity.clone(), handle);

        let existing = self
            .presence
            .join(room_id.clone(), Member::new(identity.clone(), handle));

        self.relay
            .broadcast(
                &existing,
                ServerEvent::UserJoined {
                    identity: identity.clone(),
                    handle,
                },
                Some(handle),
            )
            .await;

        self.relay
            .forward(
                handle,
                ServerEvent::JoinConfirmed {
                    message: format!("You joined room {}", room_id),
                    room_id: room_id.clone(),
                    identity: identity.clone(),
                    members: existing,
                },
            )
            .await;

        self.sessions
            .insert(handle, Session::Joined { room_id, identity });
    }

    async fn on_disconnect(&mut self, handle: ConnectionId) {
        match self.sessions.remove(&handle) {
            Some(Session::Joined { room_id, identity }) => {
                info!("User disconnected: {} ({})", identity, handle);
                self.leave_room(handle, &room_id, identity).await;
            }
            Some(Session::Connected) | None => {
                info!("User disconnected: {} (never joined)", handle);
            }
        }
    }

    async fn leave_room(&mut self, handle: ConnectionId, room_id: &RoomId, identity: Identity) {
        let remaining = self.presence.leave(&handle, room_id.as_str());
        self.identities.unbind(&handle);

        if remaining.is_empty() {
            debug!("Room {} is now empty", room_id);
            return;
        }

        self.relay
            .broadcast(&remaining, ServerEvent::UserLeft { identity, handle }, None)
            .await;
    }
}
