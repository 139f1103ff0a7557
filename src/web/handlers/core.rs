use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::web::types::SharedState;

async fn handle_health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "version": env!("CARGO_PKG_VERSION"),
        "dataFile": state.data_file.to_string_lossy(),
    }))
}

pub fn routes() -> Router<SharedState> {
    Router::new().route("/health", get(handle_health))
}
