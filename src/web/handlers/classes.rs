use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::store::{self, ClassRecord, Document};
use crate::web::error::{page, redirect_home, save_failed};
use crate::web::pages;
use crate::web::types::SharedState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClassForm {
    pub name: String,
    pub teacher: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateClassOutcome {
    Created,
    AlreadyExists,
    EmptyName,
}

/// Inserts a class with no students. An existing class of the same name is
/// left untouched, teacher included.
pub fn create_class(doc: &mut Document, name: &str, teacher: &str) -> CreateClassOutcome {
    let name = name.trim();
    if name.is_empty() {
        return CreateClassOutcome::EmptyName;
    }
    if doc.contains_key(name) {
        return CreateClassOutcome::AlreadyExists;
    }
    doc.insert(
        name.to_string(),
        ClassRecord {
            teacher: teacher.trim().to_string(),
            students: BTreeMap::new(),
        },
    );
    CreateClassOutcome::Created
}

async fn handle_classes_list(State(state): State<SharedState>) -> Response {
    let doc = store::load_or_empty(&state.data_file).await;
    tracing::debug!(classes = doc.len(), "listing classes");
    page(pages::class_list(&doc))
}

async fn handle_add_class_form() -> Response {
    page(pages::add_class_form())
}

async fn handle_add_class(State(state): State<SharedState>, Form(form): Form<ClassForm>) -> Response {
    let mut doc = store::load_or_empty(&state.data_file).await;
    match create_class(&mut doc, &form.name, &form.teacher) {
        CreateClassOutcome::Created => {
            if let Err(e) = store::save(&state.data_file, &doc).await {
                return save_failed(e);
            }
            tracing::info!(class = %form.name.trim(), "class created");
        }
        CreateClassOutcome::AlreadyExists => {
            tracing::debug!(class = %form.name.trim(), "class already exists; ignoring");
        }
        CreateClassOutcome::EmptyName => return page(pages::add_class_form()),
    }
    redirect_home()
}

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(handle_classes_list))
        .route("/add_class", get(handle_add_class_form).post(handle_add_class))
}
