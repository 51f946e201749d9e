use crate::server::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::{ClientMessage, ServerMessage, SessionId};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let session = SessionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, session, state))
}

async fn handle_socket(socket: WebSocket, session: SessionId, state: Arc<AppState>) {
    info!("New WebSocket connection: {}", session);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.registry.on_connect(session.clone(), tx);
    state.registry.send(
        &session,
        &ServerMessage::Welcome {
            session: session.clone(),
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let state = state.clone();
        let session = session.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(event) => dispatch(&state, &session, event).await,
                        Err(e) => warn!("Invalid message from {}: {:?}", session, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Disconnect path: forget the transport entry, then purge room
    // membership. Nothing is broadcast here.
    state.registry.on_disconnect(&session);
    state.relay.disconnect(&session).await;

    info!("WebSocket disconnected: {}", session);
}

async fn dispatch(state: &AppState, session: &SessionId, event: ClientMessage) {
    match event {
        ClientMessage::JoinRoom { room_id } => {
            match state.relay.join_room(session, &room_id).await {
                Ok(()) => state
                    .registry
                    .send(session, &ServerMessage::Joined { room_id }),
                Err(e) => state.registry.send(
                    session,
                    &ServerMessage::Error {
                        message: e.to_string(),
                    },
                ),
            }
        }

        ClientMessage::LeaveRoom { room_id } => {
            state.relay.leave_room(session, &room_id).await;
        }

        ClientMessage::Offer { room_id, offer } => {
            state.relay.relay_offer(session, &room_id, offer).await;
        }

        ClientMessage::Answer {
            room_id,
            answer,
            target,
        } => match target {
            Some(target) => {
                state
                    .relay
                    .relay_answer(session, &room_id, answer, &target)
                    .await;
            }
            None => warn!("Answer from {} without a target", session),
        },

        ClientMessage::IceCandidate {
            room_id,
            candidate,
            target,
        } => match target {
            Some(target) => {
                state
                    .relay
                    .relay_ice_candidate(session, &room_id, candidate, &target)
                    .await;
            }
            None => warn!("ICE candidate from {} without a target", session),
        },
    }
}
