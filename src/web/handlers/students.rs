use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::store::{self, Document, StudentRecord};
use crate::web::error::{page, redirect_home, save_failed};
use crate::web::pages;
use crate::web::types::SharedState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub sid: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStudentOutcome {
    Added,
    /// The id was already taken; the old record, history included, is gone.
    Replaced,
    ClassMissing,
    MissingFields,
}

pub fn add_student(
    doc: &mut Document,
    class_name: &str,
    sid: &str,
    name: &str,
    phone: &str,
) -> AddStudentOutcome {
    let Some(class) = doc.get_mut(class_name) else {
        return AddStudentOutcome::ClassMissing;
    };
    let sid = sid.trim();
    let name = name.trim();
    if sid.is_empty() || name.is_empty() {
        return AddStudentOutcome::MissingFields;
    }
    let previous = class.students.insert(
        sid.to_string(),
        StudentRecord {
            name: name.to_string(),
            phone: phone.trim().to_string(),
            days: Default::default(),
        },
    );
    if previous.is_some() {
        AddStudentOutcome::Replaced
    } else {
        AddStudentOutcome::Added
    }
}

async fn handle_add_student_form(
    State(state): State<SharedState>,
    Path(class_name): Path<String>,
) -> Response {
    let doc = store::load_or_empty(&state.data_file).await;
    if !doc.contains_key(&class_name) {
        return redirect_home();
    }
    page(pages::add_student_form(&class_name))
}

async fn handle_add_student(
    State(state): State<SharedState>,
    Path(class_name): Path<String>,
    Form(form): Form<StudentForm>,
) -> Response {
    let mut doc = store::load_or_empty(&state.data_file).await;
    match add_student(&mut doc, &class_name, &form.sid, &form.name, &form.phone) {
        AddStudentOutcome::ClassMissing => redirect_home(),
        AddStudentOutcome::MissingFields => page(pages::add_student_form(&class_name)),
        outcome => {
            if let Err(e) = store::save(&state.data_file, &doc).await {
                return save_failed(e);
            }
            if outcome == AddStudentOutcome::Replaced {
                tracing::warn!(class = %class_name, sid = %form.sid.trim(), "student replaced; attendance history discarded");
            } else {
                tracing::info!(class = %class_name, sid = %form.sid.trim(), "student added");
            }
            redirect_home()
        }
    }
}

pub fn routes() -> Router<SharedState> {
    Router::new().route(
        "/add_student/:class",
        get(handle_add_student_form).post(handle_add_student),
    )
}
