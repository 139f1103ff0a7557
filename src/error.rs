//! Error types for rollbookd.
//!
//! Every failure site returns one of these; the request layer decides whether
//! to degrade (log and fall back) or surface the failure.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the data file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the outbound analysis call.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no analysis API key configured")]
    MissingKey,

    #[error("analysis endpoint returned HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("unexpected analysis response: {0}")]
    Malformed(String),
}

/// Failures loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}
