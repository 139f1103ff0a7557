use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::types::SharedState;

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .merge(handlers::core::routes())
        .merge(handlers::classes::routes())
        .merge(handlers::students::routes())
        .merge(handlers::attendance::routes())
        .merge(handlers::reports::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
