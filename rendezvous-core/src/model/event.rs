use crate::model::connection::ConnectionId;
use crate::model::member::{Identity, Member};
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a browser peer sends to the relay.
///
/// Negotiation payloads (`offer`, `answer`, `candidate`) are opaque to the
/// relay and are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    /// Fields are optional on the wire so that an incomplete request is
    /// rejected by the protocol rather than by the decoder.
    JoinRoom {
        #[serde(default)]
        identity: Option<String>,
        #[serde(default)]
        room_id: Option<String>,
    },
    CallOffer {
        to: ConnectionId,
        offer: Value,
    },
    CallAccepted {
        to: ConnectionId,
        answer: Value,
    },
    NegotiationNeeded {
        to: ConnectionId,
        offer: Value,
    },
    NegotiationDone {
        to: ConnectionId,
        answer: Value,
    },
    IceCandidate {
        to: ConnectionId,
        candidate: Value,
    },
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom { .. } => "join-room",
            Self::CallOffer { .. } => "call-offer",
            Self::CallAccepted { .. } => "call-accepted",
            Self::NegotiationNeeded { .. } => "negotiation-needed",
            Self::NegotiationDone { .. } => "negotiation-done",
            Self::IceCandidate { .. } => "ice-candidate",
        }
    }

    /// Turns a negotiation frame into the event delivered to its target,
    /// stamped with the sender's handle. Returns `None` for `join-room`.
    pub fn into_relayed(self, from: ConnectionId) -> Option<(ConnectionId, ServerEvent)> {
        let relayed = match self {
            Self::JoinRoom { .. } => return None,
            Self::CallOffer { to, offer } => (to, ServerEvent::IncomingOffer { from, offer }),
            Self::CallAccepted { to, answer } => (to, ServerEvent::CallAccepted { from, answer }),
            Self::NegotiationNeeded { to, offer } => {
                (to, ServerEvent::NegotiationNeeded { from, offer })
            }
            Self::NegotiationDone { to, answer } => {
                (to, ServerEvent::NegotiationFinal { from, answer })
            }
            Self::IceCandidate { to, candidate } => {
                (to, ServerEvent::IceCandidate { from, candidate })
            }
        };
        Some(relayed)
    }
}

/// Frames the relay sends to browser peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    /// First frame on every connection: tells the client its own handle.
    Welcome {
        handle: ConnectionId,
    },
    JoinConfirmed {
        message: String,
        room_id: RoomId,
        identity: Identity,
        /// Members present before this join, in join order.
        members: Vec<Member>,
    },
    UserJoined {
        identity: Identity,
        handle: ConnectionId,
    },
    UserLeft {
        identity: Identity,
        handle: ConnectionId,
    },
    IncomingOffer {
        from: ConnectionId,
        offer: Value,
    },
    CallAccepted {
        from: ConnectionId,
        answer: Value,
    },
    NegotiationNeeded {
        from: ConnectionId,
        offer: Value,
    },
    NegotiationFinal {
        from: ConnectionId,
        answer: Value,
    },
    IceCandidate {
        from: ConnectionId,
        candidate: Value,
    },
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome { .. } => "welcome",
            Self::JoinConfirmed { .. } => "join-confirmed",
            Self::UserJoined { .. } => "user-joined",
            Self::UserLeft { .. } => "user-left",
            Self::IncomingOffer { .. } => "incoming-offer",
            Self::CallAccepted { .. } => "call-accepted",
            Self::NegotiationNeeded { .. } => "negotiation-needed",
            Self::NegotiationFinal { .. } => "negotiation-final",
            Self::IceCandidate { .. } => "ice-candidate",
        }
    }
}
