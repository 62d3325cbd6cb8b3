use rendezvous_core::{Member, ServerEvent};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{connect_peer, join, members, settle};

#[tokio::test]
async fn test_second_peer_joins() {
    init_tracing();

    let (coordinator, relay) = create_test_coordinator();

    let x = connect_peer(&coordinator).await;
    let y = connect_peer(&coordinator).await;
    join(&coordinator, x, "alice", "r1").await;
    settle(&coordinator).await;
    relay.clear().await;

    join(&coordinator, y, "bob", "r1").await;
    settle(&coordinator).await;

    assert_eq!(
        relay.sent_to(&x).await,
        vec![ServerEvent::UserJoined {
            identity: "bob".into(),
            handle: y,
        }]
    );

    let to_y = relay.sent_to(&y).await;
    assert_eq!(to_y.len(), 1, "the joiner is not told about itself");
    match &to_y[0] {
        ServerEvent::JoinConfirmed {
            room_id,
            identity,
            members,
            ..
        } => {
            assert_eq!(room_id.as_str(), "r1");
            assert_eq!(identity.as_str(), "bob");
            assert_eq!(members, &vec![Member::new("alice", x)]);
        }
        other => panic!("expected join-confirmed, got {:?}", other),
    }

    assert_eq!(
        members(&coordinator, "r1").await,
        vec![Member::new("alice", x), Member::new("bob", y)]
    );
}
