//! Criteria used when browsing the transaction history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionKind;

/// Restricts the history to one transaction kind, or none.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn accepts(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KindFilter::All => "All Transactions",
            KindFilter::Income => "Income",
            KindFilter::Expense => "Expenses",
        };
        f.write_str(label)
    }
}

/// Search text plus kind restriction applied to the history list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub kind: KindFilter,
}

impl TransactionFilter {
    pub fn new(search: impl Into<String>, kind: KindFilter) -> Self {
        Self {
            search: search.into(),
            kind,
        }
    }

    pub fn search(search: impl Into<String>) -> Self {
        Self::new(search, KindFilter::All)
    }

    pub fn kind(kind: KindFilter) -> Self {
        Self::new(String::new(), kind)
    }
}
