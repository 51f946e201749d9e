use crate::room::RelayService;
use crate::signaling::{SessionRegistry, ws_handler};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub struct AppState {
    pub registry: Arc<SessionRegistry>,
    pub relay: Arc<RelayService>,
}

pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let registry = Arc::new(SessionRegistry::new());
    let relay = Arc::new(RelayService::new(registry.clone()));

    let state = Arc::new(AppState { registry, relay });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state);

    info!("Signaling server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
