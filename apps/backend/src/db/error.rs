//! Database error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    InvalidSeed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
