//! Category labels and the derived per-category spending figures.

use serde::{Deserialize, Serialize};

/// Category labels offered to users when recording a transaction.
///
/// Stored records may carry any non-empty label; this list only seeds pickers.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Housing",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Personal Care",
    "Education",
    "Travel",
    "Gifts & Donations",
    "Salary",
    "Investment",
    "Other",
];

/// Returns true when `label` is one of [`DEFAULT_CATEGORIES`].
pub fn is_default_category(label: &str) -> bool {
    DEFAULT_CATEGORIES.contains(&label)
}

/// Summed expense amount for one category. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// A category total together with its share of all expenses, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    pub percent: f64,
}
