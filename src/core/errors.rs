use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::TransactionId;

/// Unified error type for core/domain/storage layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
    #[error("Stored data at `{}` is corrupted: {message}", path.display())]
    CorruptData { path: PathBuf, message: String },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BudgetError {
    /// True for failures the caller can surface and carry on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BudgetError::Validation(_) | BudgetError::TransactionNotFound(_)
        )
    }
}

pub type Result<T> = StdResult<T, BudgetError>;

/// Reasons a transaction draft is rejected before it touches the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Please select a category")]
    MissingCategory,
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}
