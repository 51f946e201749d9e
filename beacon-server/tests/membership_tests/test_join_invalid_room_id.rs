use beacon_core::{RelayError, SessionId};

use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_join_invalid_room_id() {
    init_tracing();

    let (relay, signaling) = create_test_relay();
    let a = SessionId::new();

    let err = relay
        .join_room(&a, "")
        .await
        .expect_err("empty room id must be rejected");

    assert_eq!(err, RelayError::InvalidRequest);
    assert!(relay.directory().is_empty(), "directory must be unmodified");
    assert_eq!(signaling.total_emitted().await, 0);
}
