//! Classroom attendance tracker: classes, students, daily presence and notes,
//! and a per-class report with a generated commentary, served as HTML and
//! persisted to a single JSON file.

pub mod analysis;
pub mod calc;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod web;
