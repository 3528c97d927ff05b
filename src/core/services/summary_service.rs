//! Aggregations over transaction snapshots.
//!
//! Every function here is pure: the same slice always yields the same figures,
//! bit for bit, because summation follows slice order.

use crate::domain::{Amounted, CategoryShare, CategoryTotal, Summary, Transaction};

pub struct SummaryService;

impl SummaryService {
    /// Sum of all income amounts; `0.0` for an empty slice.
    pub fn total_income(transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_income())
            .fold(0.0, |total, txn| total + txn.amount())
    }

    /// Sum of all expense amounts; `0.0` for an empty slice.
    pub fn total_expenses(transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .fold(0.0, |total, txn| total + txn.amount())
    }

    /// Income minus expenses. Negative when spending exceeds earnings.
    pub fn balance(transactions: &[Transaction]) -> f64 {
        Self::total_income(transactions) - Self::total_expenses(transactions)
    }

    /// Expense totals grouped by category, ordered by first appearance.
    ///
    /// Categories that only carry income are absent rather than zero-valued.
    pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            match totals.iter_mut().find(|entry| entry.category == txn.category) {
                Some(entry) => entry.total += txn.amount,
                None => totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        totals
    }

    pub fn summarize(transactions: &[Transaction]) -> Summary {
        let total_income = Self::total_income(transactions);
        let total_expenses = Self::total_expenses(transactions);
        Summary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Category totals with each category's percentage of all expenses.
    pub fn category_shares(transactions: &[Transaction]) -> Vec<CategoryShare> {
        let totals = Self::category_totals(transactions);
        let overall: f64 = totals.iter().map(|entry| entry.total).sum();
        if overall <= 0.0 {
            return Vec::new();
        }
        totals
            .into_iter()
            .map(|CategoryTotal { category, total }| CategoryShare {
                category,
                total,
                percent: total / overall * 100.0,
            })
            .collect()
    }
}
