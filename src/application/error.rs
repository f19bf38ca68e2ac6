use thiserror::Error;

use crate::domain::{LedgerError, ValidationError};
use crate::rates::RateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Expense not found at position {index} (ledger has {len})")]
    NotFound { index: usize, len: usize },

    #[error("Currency conversion unavailable: {0}")]
    ConversionUnavailable(#[from] RateError),

    #[error("An edit is already in progress; save or cancel it first")]
    EditInProgress,

    #[error("No edit in progress")]
    NoEditInProgress,
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound { index, len } => AppError::NotFound { index, len },
        }
    }
}
