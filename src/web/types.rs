use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::GeminiClient;
use crate::config::Config;

/// Immutable per-process state. The document itself is never cached here;
/// every request reads the data file afresh.
#[derive(Debug)]
pub struct AppState {
    pub data_file: PathBuf,
    pub analyzer: GeminiClient,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(data_file: PathBuf, analyzer: GeminiClient) -> Self {
        Self {
            data_file,
            analyzer,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.store.data_file.clone(),
            GeminiClient::new(config.analysis.clone()),
        )
    }
}
