use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::calc::build_report;
use crate::store;
use crate::web::error::{page, redirect_home};
use crate::web::pages;
use crate::web::types::SharedState;

async fn handle_report(
    State(state): State<SharedState>,
    Path(class_name): Path<String>,
) -> Response {
    let doc = store::load_or_empty(&state.data_file).await;
    let Some(class) = doc.get(&class_name) else {
        return redirect_home();
    };
    let report = build_report(class);
    tracing::debug!(class = %class_name, students = report.tallies.len(), "building report");
    let analysis = state.analyzer.analyze(&report.text()).await;
    page(pages::report(&class_name, class, &report, &analysis))
}

pub fn routes() -> Router<SharedState> {
    Router::new().route("/report/:class", get(handle_report))
}
