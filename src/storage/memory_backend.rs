use std::sync::{Mutex, MutexGuard};

use crate::{core::errors::BudgetError, domain::Transaction};

use super::{json_backend::parse_transactions, CorruptDataPolicy, Result, StorageBackend};

/// Keeps the serialized list in process memory, one key and one JSON value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
    on_corrupt: CorruptDataPolicy,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` as the stored value, parsed or not.
    pub fn with_raw(raw: impl Into<String>, on_corrupt: CorruptDataPolicy) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
            on_corrupt,
        }
    }

    /// The stored text, if anything has been written.
    pub fn raw(&self) -> Option<String> {
        self.lock().ok().and_then(|slot| slot.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| BudgetError::StorageError("memory storage lock poisoned".into()))
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Vec<Transaction>> {
        let mut slot = self.lock()?;
        let Some(data) = slot.as_deref() else {
            return Ok(Vec::new());
        };
        match parse_transactions(data) {
            Ok(transactions) => Ok(transactions),
            Err(err) => match self.on_corrupt {
                CorruptDataPolicy::Fail => Err(BudgetError::CorruptData {
                    path: "memory".into(),
                    message: err.to_string(),
                }),
                CorruptDataPolicy::Quarantine => {
                    tracing::warn!(error = %err, "discarding unreadable in-memory data");
                    *slot = None;
                    Ok(Vec::new())
                }
            },
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string(transactions)?;
        *self.lock()? = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_empty_and_saves_empty_array() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());
        storage.save(&[]).unwrap();
        assert_eq!(storage.raw().as_deref(), Some("[]"));
        storage.save(&[]).unwrap();
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn unreadable_value_propagates_by_default() {
        let storage = MemoryStorage::with_raw("oops", CorruptDataPolicy::Fail);
        assert!(matches!(
            storage.load(),
            Err(BudgetError::CorruptData { .. })
        ));
    }

    const DUPLICATED: &str = r#"[
        {"id":"dup","amount":50,"description":"Coffee","category":"Food & Dining","date":"2024-01-05","type":"expense"},
        {"id":"dup","amount":20,"description":"Bus","category":"Transportation","date":"2024-01-06","type":"expense"}
    ]"#;

    #[test]
    fn repeated_ids_are_rejected() {
        let storage = MemoryStorage::with_raw(DUPLICATED, CorruptDataPolicy::Fail);
        let err = storage.load().expect_err("duplicate ids");
        assert!(
            matches!(err, BudgetError::CorruptData { ref message, .. } if message.contains("dup")),
            "{err:?}"
        );
        assert_eq!(storage.raw().as_deref(), Some(DUPLICATED));
    }

    #[test]
    fn quarantine_clears_unreadable_value() {
        let storage = MemoryStorage::with_raw("oops", CorruptDataPolicy::Quarantine);
        assert!(storage.load().unwrap().is_empty());
        assert!(storage.raw().is_none());
    }
}
