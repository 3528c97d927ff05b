#![doc(test(attr(deny(warnings))))]

//! Budget Tracker records income and expense entries, persists them to a local
//! JSON document, and derives balance, totals, and per-category spending from
//! the recorded history.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod storage;
pub mod utils;

pub use crate::core::errors::{BudgetError, Result, ValidationError};
pub use crate::core::services::{FilterService, SummaryService, TransactionService};
pub use crate::core::transaction_store::{EditState, TransactionStore};
pub use crate::domain::{
    CategoryShare, CategoryTotal, KindFilter, Summary, Transaction, TransactionDraft,
    TransactionFilter, TransactionId, TransactionKind,
};

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    utils::init_tracing();
}
