use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::StoreError;

pub fn page(html: String) -> Response {
    Html(html).into_response()
}

/// 303 back to the class list. Used for every unknown-class reference.
pub fn redirect_home() -> Response {
    Redirect::to("/").into_response()
}

pub fn save_failed(e: StoreError) -> Response {
    tracing::error!(error = %e, "failed to save data file");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("failed to save data: {}", e),
    )
        .into_response()
}
