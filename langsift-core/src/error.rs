//! Pipeline error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or running the identification pipeline
///
/// Every variant is terminal for a run: the pipeline never skips a failing
/// file or unit and never returns a partial result set.
#[derive(Error, Debug)]
pub enum LangsiftError {
    /// Input path is missing or is neither a regular file nor a directory
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid pipeline or model configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A file or directory could not be read
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read when the failure happened
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The language identification backend failed on a unit
    #[error("identification failed: {0}")]
    Identification(String),

    /// Result serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing rendered output failed
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

impl LangsiftError {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LangsiftError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, LangsiftError>;
