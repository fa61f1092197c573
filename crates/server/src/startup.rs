use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig, StoreConfig};
use service::persons::InMemoryPersonStore;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Fresh store, seeded with the fixtures unless `store.seed = false`.
pub fn build_store(cfg: &StoreConfig) -> InMemoryPersonStore {
    if cfg.seed {
        InMemoryPersonStore::seeded()
    } else {
        InMemoryPersonStore::new()
    }
}

/// Router wired with a store built from config.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::new(build_store(&cfg.store));
    routes::build_router(state, build_cors())
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    server.socket_addr().map_err(|e| {
        StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port))
    })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, seed = cfg.store.seed, "starting persons api");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(StartupError::from)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::from)?;
    Ok(())
}
