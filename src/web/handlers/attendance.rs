use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use std::collections::HashMap;

use crate::store::{self, AttendanceRecord, ClassRecord};
use crate::web::error::{page, redirect_home, save_failed};
use crate::web::pages::{self, note_field, present_field};
use crate::web::types::SharedState;

/// ISO date for the server's local calendar day.
pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

/// Writes one record per student for `date`, replacing any earlier record on
/// that date. A student with no submitted fields is recorded absent.
pub fn record_attendance(
    class: &mut ClassRecord,
    form: &HashMap<String, String>,
    date: &str,
) -> usize {
    let mut written = 0usize;
    for (sid, student) in class.students.iter_mut() {
        let present = form.get(&present_field(sid)).map(String::as_str) == Some("on");
        let note = form
            .get(&note_field(sid))
            .map(|n| n.trim().to_string())
            .unwrap_or_default();
        student
            .days
            .insert(date.to_string(), AttendanceRecord { present, note });
        written += 1;
    }
    written
}

async fn handle_attendance_form(
    State(state): State<SharedState>,
    Path(class_name): Path<String>,
) -> Response {
    let doc = store::load_or_empty(&state.data_file).await;
    let Some(class) = doc.get(&class_name) else {
        return redirect_home();
    };
    page(pages::attendance_form(&class_name, class))
}

async fn handle_attendance_submit(
    State(state): State<SharedState>,
    Path(class_name): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let mut doc = store::load_or_empty(&state.data_file).await;
    let Some(class) = doc.get_mut(&class_name) else {
        return redirect_home();
    };
    let date = today();
    let written = record_attendance(class, &form, &date);
    if let Err(e) = store::save(&state.data_file, &doc).await {
        return save_failed(e);
    }
    tracing::info!(class = %class_name, date = %date, students = written, "attendance recorded");
    redirect_home()
}

pub fn routes() -> Router<SharedState> {
    Router::new().route(
        "/attendance/:class",
        get(handle_attendance_form).post(handle_attendance_submit),
    )
}
