pub mod json_backend;
pub mod memory_backend;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::errors::BudgetError,
    domain::{Transaction, TransactionId},
};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Abstraction over persistence backends holding the full transaction list.
///
/// Every save is a complete snapshot that replaces whatever was stored before.
pub trait StorageBackend: Send + Sync {
    /// Reads the stored list; an empty list when nothing has been saved yet.
    fn load(&self) -> Result<Vec<Transaction>>;
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
}

/// What `load` does when the stored text cannot be parsed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CorruptDataPolicy {
    /// Propagate [`BudgetError::CorruptData`] to the caller.
    #[default]
    Fail,
    /// Move the unreadable data aside and start from an empty list.
    Quarantine,
}

/// Why a stored document could not be read back as a transaction list.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
    #[error("transaction id `{0}` appears more than once")]
    DuplicateId(TransactionId),
}

pub use json_backend::JsonStorage;
pub use memory_backend::MemoryStorage;
