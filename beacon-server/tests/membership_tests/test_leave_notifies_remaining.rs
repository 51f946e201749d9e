use beacon_core::{ServerMessage, SessionId};

use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_leave_notifies_remaining() {
    init_tracing();

    let (relay, signaling) = create_test_relay();
    let a = SessionId::new();
    let b = SessionId::new();

    relay.join_room(&a, "r1").await.expect("join failed");
    relay.join_room(&b, "r1").await.expect("join failed");

    let to_a_before = signaling.messages_for(&a).await.len();

    relay.leave_room(&a, "r1").await;

    // B is the only remaining member and gets the departure notice. A is
    // already out of the set and hears nothing about its own leave.
    assert_eq!(
        signaling.messages_for(&b).await,
        vec![ServerMessage::UserLeft { user: a.clone() }]
    );
    assert_eq!(signaling.messages_for(&a).await.len(), to_a_before);

    assert_eq!(relay.directory().members("r1").unwrap(), vec![b]);
}
