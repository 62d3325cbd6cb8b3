use rendezvous_core::{ClientEvent, Member, ServerEvent};
use serde_json::json;
use std::time::Duration;

use crate::integration::init_tracing;
use crate::utils::{TestClient, spawn_server};

#[tokio::test]
async fn test_end_to_end_session() {
    init_tracing();

    let addr = spawn_server().await.expect("server failed to start");

    let mut alice = TestClient::connect(addr).await.expect("alice connect");
    let mut bob = TestClient::connect(addr).await.expect("bob connect");
    assert_ne!(alice.handle, bob.handle);

    alice.join("alice", "r1").await.expect("send failed");
    match alice.recv().await.expect("no confirmation") {
        ServerEvent::JoinConfirmed {
            room_id,
            identity,
            members,
            ..
        } => {
            assert_eq!(room_id.as_str(), "r1");
            assert_eq!(identity.as_str(), "alice");
            assert!(members.is_empty());
        }
        other => panic!("expected join-confirmed, got {:?}", other),
    }

    bob.join("bob", "r1").await.expect("send failed");
    match bob.recv().await.expect("no confirmation") {
        ServerEvent::JoinConfirmed { members, .. } => {
            assert_eq!(members, vec![Member::new("alice", alice.handle)]);
        }
        other => panic!("expected join-confirmed, got {:?}", other),
    }
    assert_eq!(
        alice.recv().await.expect("no user-joined"),
        ServerEvent::UserJoined {
            identity: "bob".into(),
            handle: bob.handle,
        }
    );

    alice
        .send(&ClientEvent::CallOffer {
            to: bob.handle,
            offer: json!({"type": "offer", "sdp": "v=0"}),
        })
        .await
        .expect("send failed");
    assert_eq!(
        bob.recv().await.expect("no offer"),
        ServerEvent::IncomingOffer {
            from: alice.handle,
            offer: json!({"type": "offer", "sdp": "v=0"}),
        }
    );
    alice
        .expect_silence(Duration::from_millis(100))
        .await
        .expect("sender must not receive its own offer");

    let bob_handle = bob.handle;
    bob.close().await.expect("close failed");
    assert_eq!(
        alice.recv().await.expect("no user-left"),
        ServerEvent::UserLeft {
            identity: "bob".into(),
            handle: bob_handle,
        }
    );

    alice.close().await.expect("close failed");
}
