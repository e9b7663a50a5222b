use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store backends and record encoding.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock store file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid store key '{0}'")]
    InvalidKey(String),

    #[error("Failed to encode record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Record '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    #[error("Record '{key}' has unsupported schema version {version}")]
    UnsupportedVersion { key: String, version: u32 },
}
