mod common;

use budget_tracker::{
    BudgetError, CategoryTotal, SummaryService, TransactionId, ValidationError,
};

use common::{coffee, paycheck, setup_test_env};

#[test]
fn recording_coffee_then_paycheck_then_editing_and_deleting() {
    let (mut store, _config, _base) = setup_test_env();

    // 1. a single expense
    let coffee_txn = store.create(coffee()).expect("create coffee");
    assert_eq!(store.len(), 1);
    assert_eq!(SummaryService::total_expenses(store.list()), 50.0);
    assert_eq!(SummaryService::balance(store.list()), -50.0);

    // 2. income does not show up in category totals
    store.create(paycheck()).expect("create paycheck");
    assert_eq!(SummaryService::balance(store.list()), 950.0);
    assert_eq!(
        store.category_totals(),
        vec![CategoryTotal {
            category: "Food & Dining".into(),
            total: 50.0,
        }]
    );

    // 3. update keeps the count
    store
        .update(&coffee_txn.id, coffee().with_amount(75.0))
        .expect("update coffee");
    assert_eq!(SummaryService::total_expenses(store.list()), 75.0);
    assert_eq!(SummaryService::balance(store.list()), 925.0);
    assert_eq!(store.len(), 2);

    // 4. delete leaves only the salary
    store.delete(&coffee_txn.id).expect("delete coffee");
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].category, "Salary");
    assert!(store.category_totals().is_empty());
}

#[test]
fn zero_amount_is_rejected_and_list_is_unchanged() {
    let (mut store, _config, _base) = setup_test_env();
    store.create(paycheck()).unwrap();
    let before = store.list().to_vec();

    let err = store
        .create(coffee().with_amount(0.0))
        .expect_err("zero amount must be rejected");

    assert!(matches!(
        err,
        BudgetError::Validation(ValidationError::NonPositiveAmount)
    ));
    assert!(!err.to_string().is_empty());
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn create_prepends_and_keeps_prior_records() {
    let (mut store, _config, _base) = setup_test_env();
    let first = store.create(paycheck()).unwrap();
    let second = store.create(coffee()).unwrap();

    assert_eq!(store.list()[0], second);
    assert_eq!(store.list()[1], first);
    assert_eq!(second.to_draft(), coffee());
}

#[test]
fn delete_of_unknown_id_changes_nothing() {
    let (mut store, _config, _base) = setup_test_env();
    store.create(coffee()).unwrap();
    let before = store.list().to_vec();

    let removed = store.delete(&TransactionId::new("missing")).unwrap();

    assert!(removed.is_none());
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn update_preserves_position_and_id() {
    let (mut store, _config, _base) = setup_test_env();
    let oldest = store.create(coffee()).unwrap();
    store.create(paycheck()).unwrap();
    store.create(coffee().with_amount(4.5)).unwrap();

    let updated = store
        .update(&oldest.id, paycheck().with_amount(10.0))
        .unwrap();

    assert_eq!(store.list()[2].id, oldest.id);
    assert_eq!(store.list()[2], updated);
    assert_eq!(updated.to_draft(), paycheck().with_amount(10.0));
}

#[test]
fn update_of_unknown_id_reports_not_found() {
    let (mut store, _config, _base) = setup_test_env();
    store.create(coffee()).unwrap();
    let before = store.list().to_vec();

    let err = store
        .update(&TransactionId::new("missing"), coffee())
        .expect_err("unknown id");

    assert!(matches!(err, BudgetError::TransactionNotFound(_)));
    assert!(err.is_recoverable());
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn ids_stay_unique_across_many_creates() {
    let (mut store, _config, _base) = setup_test_env();
    for idx in 0..200 {
        store.create(coffee().with_amount(1.0 + idx as f64)).unwrap();
    }
    let mut ids: Vec<_> = store.list().iter().map(|txn| txn.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}
