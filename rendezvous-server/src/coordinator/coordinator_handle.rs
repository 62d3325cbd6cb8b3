use crate::coordinator::CoordinatorCommand;
use rendezvous_core::{ClientEvent, ConnectionId, Member, RoomId};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("coordinator has shut down")]
    Closed,
}

/// Cloneable sending side of the coordinator's command queue.
#[derive(Clone)]
pub struct CoordinatorHandle {
    tx: mpsc::Sender<CoordinatorCommand>,
}

impl CoordinatorHandle {
    pub fn new(tx: mpsc::Sender<CoordinatorCommand>) -> Self {
        Self { tx }
    }

    pub async fn send(&self, cmd: CoordinatorCommand) -> Result<(), CoordinatorError> {
        self.tx.send(cmd).await.map_err(|_| CoordinatorError::Closed)
    }

    pub async fn connect(&self, handle: ConnectionId) -> Result<(), CoordinatorError> {
        self.send(CoordinatorCommand::Connect { handle }).await
    }

    pub async fn event(
        &self,
        handle: ConnectionId,
        event: ClientEvent,
    ) -> Result<(), CoordinatorError> {
        self.send(CoordinatorCommand::Event { handle, event }).await
    }

    pub async fn disconnect(&self, handle: ConnectionId) -> Result<(), CoordinatorError> {
        self.send(CoordinatorCommand::Disconnect { handle }).await
    }

    pub async fn members_of(&self, room_id: impl Into<RoomId>) -> Result<Vec<Member>, CoordinatorError> {
        let (reply, rx) = oneshot::channel();
        self.send(CoordinatorCommand::MembersOf {
            room_id: room_id.into(),
            reply,
        })
        .await?;
        rx.await.map_err(|_| CoordinatorError::Closed)
    }
}
