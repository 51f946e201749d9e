use beacon_core::{ServerMessage, SessionId};
use serde_json::json;

use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_ice_candidate_unicast() {
    init_tracing();

    let (relay, signaling) = create_test_relay();
    let a = SessionId::new();
    let b = SessionId::new();
    let c = SessionId::new();

    relay.join_room(&a, "r1").await.expect("join failed");
    relay.join_room(&b, "r1").await.expect("join failed");
    relay.join_room(&c, "r1").await.expect("join failed");

    let candidate = json!({
        "candidate": "candidate:1 1 udp 2122260223 192.0.2.1 54321 typ host",
        "sdpMid": "0",
    });
    relay.relay_ice_candidate(&a, "r1", candidate.clone(), &b).await;

    let is_candidate = |msg: &ServerMessage| matches!(msg, ServerMessage::IceCandidate { .. });

    assert_eq!(
        signaling.messages_for_matching(&b, is_candidate).await,
        vec![ServerMessage::IceCandidate {
            candidate,
            from: a.clone(),
        }]
    );
    assert!(
        signaling
            .messages_for_matching(&c, is_candidate)
            .await
            .is_empty()
    );
}
