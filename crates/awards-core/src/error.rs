//! Error types for loading award data.
//!
//! The search engine itself has no error type; only getting data into memory
//! can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}
