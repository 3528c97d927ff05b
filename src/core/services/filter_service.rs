use crate::domain::{Transaction, TransactionFilter};

/// Search and kind filtering for the transaction history view.
pub struct FilterService;

impl FilterService {
    /// Returns matching transactions in their original order.
    pub fn apply<'a>(
        transactions: &'a [Transaction],
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        let needle = filter.search.to_lowercase();
        transactions
            .iter()
            .filter(|txn| filter.kind.accepts(txn.kind))
            .filter(|txn| Self::matches_search(txn, &needle))
            .collect()
    }

    /// Case-insensitive match on description or category; an empty needle matches all.
    pub fn matches_search(transaction: &Transaction, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        transaction.description.to_lowercase().contains(needle)
            || transaction.category.to_lowercase().contains(needle)
    }
}
