use crate::domain::transaction::TxId;
use crate::domain::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger blob is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("amount must be greater than 0")]
    NonPositiveAmount,
    #[error("unknown transaction type `{0}`, expected `received` or `given`")]
    InvalidDirection(String),
    #[error("no transaction with id {0}")]
    UnknownId(TxId),
    #[error("unknown or already spent confirmation token")]
    UnknownToken,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
