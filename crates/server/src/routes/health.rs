//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use momentum_core::config::StorageMode;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    storage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_file: Option<String>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data_file = match state.mode() {
        StorageMode::Durable(path) => Some(path.to_string_lossy().to_string()),
        StorageMode::Ephemeral => None,
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.mode().label().to_string(),
        data_file,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
