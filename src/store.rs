use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The whole persisted state, keyed by class name.
pub type Document = BTreeMap<String, ClassRecord>;

// Every field defaults: one hand-edited or partial record must not make the
// whole file unreadable, since the next save would then drop every class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub students: BTreeMap<String, StudentRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    // Older files may lack `days` until the first attendance submission.
    #[serde(default)]
    pub days: BTreeMap<String, AttendanceRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub note: String,
}

pub async fn load(path: &Path) -> Result<Document, StoreError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Request-path load: an unreadable or corrupt file reads as "no data yet".
pub async fn load_or_empty(path: &Path) -> Document {
    match load(path).await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "data file unusable; continuing with an empty document");
            Document::new()
        }
    }
}

/// Overwrites the file in place. A crash mid-write can leave it truncated.
pub async fn save(path: &Path, doc: &Document) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    let text = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;
    tokio::fs::write(path, text)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}
