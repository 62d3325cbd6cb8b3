use rendezvous_core::{ClientEvent, ServerEvent};
use serde_json::json;

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{connect_peer, join, settle};

#[tokio::test]
async fn test_full_negotiation_cycle() {
    init_tracing();

    let (coordinator, relay) = create_test_coordinator();

    let x = connect_peer(&coordinator).await;
    let y = connect_peer(&coordinator).await;
    join(&coordinator, x, "alice", "r1").await;
    join(&coordinator, y, "bob", "r1").await;
    settle(&coordinator).await;
    relay.clear().await;

    let offer = json!({"type": "offer", "sdp": "v=0 offer"});
    let answer = json!({"type": "answer", "sdp": "v=0 answer"});
    let renegotiation = json!({"type": "offer", "sdp": "v=0 renegotiate"});
    let final_answer = json!({"type": "answer", "sdp": "v=0 final"});
    let candidate = json!({"candidate": "candidate:0", "sdpMid": "0"});

    let steps = [
        (x, ClientEvent::CallOffer { to: y, offer: offer.clone() }),
        (y, ClientEvent::CallAccepted { to: x, answer: answer.clone() }),
        (
            x,
            ClientEvent::NegotiationNeeded {
                to: y,
                offer: renegotiation.clone(),
            },
        ),
        (
            y,
            ClientEvent::NegotiationDone {
                to: x,
                answer: final_answer.clone(),
            },
        ),
        (
            y,
            ClientEvent::IceCandidate {
                to: x,
                candidate: candidate.clone(),
            },
        ),
    ];

    for (from, event) in steps {
        coordinator
            .event(from, event)
            .await
            .expect("coordinator closed");
    }
    settle(&coordinator).await;

    assert_eq!(
        relay.sent_to(&y).await,
        vec![
            ServerEvent::IncomingOffer { from: x, offer },
            ServerEvent::NegotiationNeeded {
                from: x,
                offer: renegotiation,
            },
        ]
    );
    assert_eq!(
        relay.sent_to(&x).await,
        vec![
            ServerEvent::CallAccepted { from: y, answer },
            ServerEvent::NegotiationFinal {
                from: y,
                answer: final_answer,
            },
            ServerEvent::IceCandidate { from: y, candidate },
        ]
    );
}
