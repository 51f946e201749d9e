use beacon_core::{ServerMessage, SessionId};

use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_join_notifies_existing_members() {
    init_tracing();

    let (relay, signaling) = create_test_relay();
    let a = SessionId::new();
    let b = SessionId::new();

    relay.join_room(&a, "r1").await.expect("join failed");

    // A was alone, so its join produced no notifications at all.
    assert_eq!(signaling.total_emitted().await, 0);

    relay.join_room(&b, "r1").await.expect("join failed");

    // A learns about B; B does not see its own join.
    assert_eq!(
        signaling.messages_for(&a).await,
        vec![ServerMessage::UserJoined { user: b.clone() }]
    );
    assert!(signaling.messages_for(&b).await.is_empty());
}
