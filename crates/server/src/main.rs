//! API Server for Momentum
//!
//! Serves the board over a JSON REST API, by default on port 8081.

mod routes;
mod state;

use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use momentum_core::config::StorageMode;

use crate::state::AppState;

const ADDR_ENV: &str = "MOMENTUM_ADDR";
const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8081);

fn bind_addr() -> anyhow::Result<SocketAddr> {
    match std::env::var(ADDR_ENV) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", ADDR_ENV, raw)),
        Err(_) => Ok(SocketAddr::from(DEFAULT_ADDR)),
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::board::router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "momentum_server=debug,momentum_core=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mode = StorageMode::from_env();
    match &mode {
        StorageMode::Durable(path) => tracing::info!("Using board file: {:?}", path),
        StorageMode::Ephemeral => tracing::info!("Ephemeral mode: board is kept in memory only"),
    }

    let state = AppState::open(mode)
        .await
        .context("Failed to open board session")?;

    let addr = bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("REST API listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
