#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use budget_tracker::{
    config::ConfigManager,
    storage::{CorruptDataPolicy, JsonStorage},
    TransactionDraft, TransactionStore,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn json_storage(base: &PathBuf) -> JsonStorage {
    JsonStorage::new(Some(base.clone()), CorruptDataPolicy::Fail).expect("create json storage")
}

/// Creates an isolated store and config manager backed by a fresh directory.
pub fn setup_test_env() -> (TransactionStore, ConfigManager, PathBuf) {
    let base = temp_base();
    let store = TransactionStore::open(Box::new(json_storage(&base))).expect("open store");
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (store, config_manager, base)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn coffee() -> TransactionDraft {
    TransactionDraft::expense(50.0, "Coffee", "Food & Dining", date(2024, 1, 5))
}

pub fn paycheck() -> TransactionDraft {
    TransactionDraft::income(1000.0, "Paycheck", "Salary", date(2024, 1, 1))
}
