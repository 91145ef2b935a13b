//! pullshield Gateway
//!
//! HTTP relay exposing container-registry download counts:
//! - JSON stats endpoint: /api/:owner[/:repo]/:pkg
//! - Badge redirect: /shield/:owner[/:repo]/:pkg
//! - Response cache keyed by full request URL, `?no-cache` to bypass

use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use pullshield_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config (strict parsing + validate); built-in defaults when no file.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pullshield.yaml".to_string());
    let cfg = if Path::new(&path).exists() {
        config::load_from_file(&path).expect("config load failed")
    } else {
        tracing::info!(%path, "no config file, using defaults");
        config::GatewayConfig::default()
    };

    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "pullshield-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
