//! Business logic helpers for managing transactions.

use crate::core::errors::{BudgetError, Result, ValidationError};
use crate::domain::{Identifiable, Transaction, TransactionDraft, TransactionId};

/// Provides validated CRUD helpers over an owned transaction list.
///
/// These helpers never persist; [`crate::core::transaction_store::TransactionStore`]
/// pairs them with a storage backend.
pub struct TransactionService;

impl TransactionService {
    /// Checks a draft against the entry rules, reporting the first one broken.
    pub fn validate(draft: &TransactionDraft) -> std::result::Result<(), ValidationError> {
        if draft.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount);
        }
        if draft.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Validates the draft and prepends a new record with a fresh id.
    pub fn add(transactions: &mut Vec<Transaction>, draft: TransactionDraft) -> Result<Transaction> {
        Self::validate(&draft)?;
        let id = Self::mint_id(transactions);
        let transaction = Transaction::from_draft(id, draft);
        transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    /// Replaces the record identified by `id` in place, keeping its id and position.
    pub fn update(
        transactions: &mut [Transaction],
        id: &TransactionId,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        Self::validate(&draft)?;
        let slot = transactions
            .iter_mut()
            .find(|txn| txn.id() == id)
            .ok_or_else(|| BudgetError::TransactionNotFound(id.clone()))?;
        *slot = Transaction::from_draft(id.clone(), draft);
        Ok(slot.clone())
    }

    /// Removes the record identified by `id`; absent ids leave the list untouched.
    pub fn remove(transactions: &mut Vec<Transaction>, id: &TransactionId) -> Option<Transaction> {
        let index = transactions.iter().position(|txn| txn.id() == id)?;
        Some(transactions.remove(index))
    }

    pub fn find<'a>(transactions: &'a [Transaction], id: &TransactionId) -> Option<&'a Transaction> {
        transactions.iter().find(|txn| txn.id() == id)
    }

    /// Generates an id not already used in `transactions`.
    fn mint_id(transactions: &[Transaction]) -> TransactionId {
        loop {
            let candidate = TransactionId::generate();
            if Self::find(transactions, &candidate).is_none() {
                return candidate;
            }
            tracing::warn!(id = %candidate, "generated transaction id collided; retrying");
        }
    }
}
