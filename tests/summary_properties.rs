mod common;

use budget_tracker::{
    FilterService, KindFilter, SummaryService, Transaction, TransactionDraft, TransactionFilter,
    TransactionId,
};

use common::date;

/// Deterministic pseudo-random ledger; categories and kinds cycle by index.
fn generated_ledger(len: usize, seed: u64) -> Vec<Transaction> {
    const CATEGORIES: [&str; 5] = ["Housing", "Travel", "Salary", "Shopping", "Utilities"];
    let mut state = seed;
    (0..len)
        .map(|idx| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let cents = (state >> 33) % 100_000 + 1;
            let amount = cents as f64 / 100.0;
            let category = CATEGORIES[(state >> 20) as usize % CATEGORIES.len()];
            let draft = if state % 3 == 0 {
                TransactionDraft::income(amount, format!("in #{idx}"), category, date(2024, 3, 1))
            } else {
                TransactionDraft::expense(amount, format!("out #{idx}"), category, date(2024, 3, 2))
            };
            Transaction::from_draft(TransactionId::new(format!("gen-{idx}")), draft)
        })
        .collect()
}

#[test]
fn balance_equals_income_minus_expenses_for_many_ledgers() {
    for seed in 0..25 {
        let ledger = generated_ledger(seed as usize * 3, seed);
        assert_eq!(
            SummaryService::balance(&ledger),
            SummaryService::total_income(&ledger) - SummaryService::total_expenses(&ledger)
        );
    }
}

#[test]
fn category_totals_cover_exactly_the_expense_categories() {
    for seed in 0..25 {
        let ledger = generated_ledger(40, seed);
        let totals = SummaryService::category_totals(&ledger);

        let sum: f64 = totals.iter().map(|entry| entry.total).sum();
        let expenses = SummaryService::total_expenses(&ledger);
        assert!(
            (sum - expenses).abs() < 1e-6,
            "seed {seed}: {sum} != {expenses}"
        );

        for entry in &totals {
            assert!(entry.total > 0.0);
            assert!(ledger
                .iter()
                .any(|txn| txn.is_expense() && txn.category == entry.category));
        }
        for txn in ledger.iter().filter(|txn| txn.is_expense()) {
            assert_eq!(
                totals
                    .iter()
                    .filter(|entry| entry.category == txn.category)
                    .count(),
                1
            );
        }
    }
}

#[test]
fn expense_filter_agrees_with_total_expenses() {
    let ledger = generated_ledger(60, 7);
    let expenses: f64 = FilterService::apply(&ledger, &TransactionFilter::kind(KindFilter::Expense))
        .iter()
        .map(|txn| txn.amount)
        .sum();
    assert_eq!(expenses, SummaryService::total_expenses(&ledger));
}
