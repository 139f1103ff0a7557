mod error;
pub mod handlers;
pub mod pages;
mod router;
mod types;

pub use router::build_router;
pub use types::{AppState, SharedState};
