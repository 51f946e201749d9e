use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = env::var("BEACON_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr: SocketAddr = addr.parse().context("invalid BEACON_ADDR")?;

    beacon_server::run(addr).await
}
