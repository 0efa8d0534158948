use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HabitError {
    #[error("habit name must not be empty")]
    EmptyName,
    #[error("`{0}` is not a yyyy-MM-dd calendar day")]
    InvalidDay(String),
}

/// Failures raised by a [`crate::storage::SnapshotStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
    #[error("snapshot could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}
