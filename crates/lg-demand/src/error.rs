//! Demand error type.

use thiserror::Error;

use crate::MobilityClass;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("fleet has no vehicle type of class {0:?}")]
    MissingClass(MobilityClass),
}

pub type DemandResult<T> = Result<T, DemandError>;
