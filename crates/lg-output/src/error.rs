//! Error types for lg-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing scenario artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("writer already finished; cannot write {0}")]
    Finished(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
