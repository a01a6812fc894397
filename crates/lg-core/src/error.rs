//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `LotError` as one variant
//! so configuration failures surface unchanged through the pipeline.

use thiserror::Error;

/// Errors raised while validating layout parameters.
#[derive(Debug, Error)]
pub enum LotError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lg-core`.
pub type LotResult<T> = Result<T, LotError>;
