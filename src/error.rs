// File: src/error.rs
use thiserror::Error;

/// Errors from the non-pure edges of the crate: catalog files, snapshots and
/// configuration. Normalization, expansion and matching never fail.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
