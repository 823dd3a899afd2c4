//! Prices errors.

use std::io;

use tariff::prelude::{PriceId, PriceRecordError};
use thiserror::Error;

/// Failures of a price record store.
#[derive(Debug, Error)]
pub enum PriceStoreError {
    #[error("price store unavailable")]
    Unavailable(#[source] sqlx::Error),

    #[error("stored price record is invalid")]
    InvariantViolation(#[from] PriceRecordError),
}

impl From<sqlx::Error> for PriceStoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::Unavailable(error)
    }
}

/// Failures surfaced by the prices service. A missing price is not an error.
#[derive(Debug, Error)]
pub enum PricesServiceError {
    #[error("price store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("price record violates its invariants")]
    InvariantViolation(#[source] PriceRecordError),
}

impl From<PriceStoreError> for PricesServiceError {
    fn from(error: PriceStoreError) -> Self {
        match error {
            PriceStoreError::Unavailable(source) => Self::StoreUnavailable(source),
            PriceStoreError::InvariantViolation(source) => Self::InvariantViolation(source),
        }
    }
}

/// Failures loading a price fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read price fixture")]
    Io(#[from] io::Error),

    #[error("failed to parse price fixture")]
    Yaml(#[from] serde_norway::Error),

    #[error("price id {0} appears more than once")]
    DuplicatePriceId(PriceId),
}
