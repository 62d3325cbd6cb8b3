use rendezvous_core::ServerEvent;

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::connect_peer;

#[tokio::test]
async fn test_welcome_carries_handle() {
    init_tracing();

    let (coordinator, relay) = create_test_coordinator();

    let x = connect_peer(&coordinator).await;

    assert_eq!(relay.sent_to(&x).await, vec![ServerEvent::Welcome { handle: x }]);
}

#[tokio::test]
async fn test_clear_after_connect_leaves_no_welcome_behind() {
    init_tracing();

    let (coordinator, relay) = create_test_coordinator();

    for _ in 0..10 {
        connect_peer(&coordinator).await;
        relay.clear().await;
        assert!(relay.all().await.is_empty());
    }
}
