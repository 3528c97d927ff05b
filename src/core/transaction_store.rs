use crate::config::Config;
use crate::core::errors::{BudgetError, Result};
use crate::core::services::{FilterService, SummaryService, TransactionService};
use crate::domain::{
    CategoryTotal, Displayable, Summary, Transaction, TransactionDraft, TransactionFilter,
    TransactionId,
};
use crate::storage::{JsonStorage, StorageBackend};

/// Which record, if any, the edit form currently targets.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(Transaction),
}

/// Sole owner of the transaction list; mirrors every change to storage.
///
/// Mutations build the next list, save it, and only then commit it, so the
/// in-memory list never drifts from the last successful snapshot on disk.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    edit: EditState,
    storage: Box<dyn StorageBackend>,
}

impl TransactionStore {
    /// Loads the stored list and writes it straight back to sync storage.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let transactions = storage.load()?;
        storage.save(&transactions)?;
        tracing::info!(count = transactions.len(), "transaction store opened");
        Ok(Self {
            transactions,
            edit: EditState::Idle,
            storage,
        })
    }

    /// Opens the JSON-backed store in the configured data directory.
    pub fn open_with_config(config: &Config) -> Result<Self> {
        let storage = JsonStorage::new(Some(config.resolve_data_dir()), config.on_corrupt)?;
        Self::open(Box::new(storage))
    }

    /// Current snapshot, newest-created first.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        TransactionService::find(&self.transactions, id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records a new transaction at the head of the list.
    pub fn create(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let mut next = self.transactions.clone();
        let created = TransactionService::add(&mut next, draft)?;
        self.commit(next)?;
        tracing::info!(transaction = %created.display_label(), "transaction created");
        Ok(created)
    }

    /// Replaces the fields of an existing transaction, keeping its id and position.
    pub fn update(&mut self, id: &TransactionId, draft: TransactionDraft) -> Result<Transaction> {
        let mut next = self.transactions.clone();
        let updated = match TransactionService::update(&mut next, id, draft) {
            Ok(updated) => updated,
            Err(err) => {
                if matches!(err, BudgetError::TransactionNotFound(_)) {
                    tracing::warn!(%id, "update targeted unknown transaction");
                }
                return Err(err);
            }
        };
        self.commit(next)?;
        if matches!(&self.edit, EditState::Editing(target) if target.id == *id) {
            self.edit = EditState::Editing(updated.clone());
        }
        tracing::info!(transaction = %updated.display_label(), "transaction updated");
        Ok(updated)
    }

    /// Removes a transaction. Unknown ids are a no-op and trigger no write.
    pub fn delete(&mut self, id: &TransactionId) -> Result<Option<Transaction>> {
        let mut next = self.transactions.clone();
        let Some(removed) = TransactionService::remove(&mut next, id) else {
            tracing::debug!(%id, "delete ignored for unknown transaction");
            return Ok(None);
        };
        self.commit(next)?;
        if matches!(&self.edit, EditState::Editing(target) if target.id == *id) {
            self.edit = EditState::Idle;
        }
        tracing::info!(transaction = %removed.display_label(), "transaction deleted");
        Ok(Some(removed))
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// The transaction currently staged for editing.
    pub fn editing(&self) -> Option<&Transaction> {
        match &self.edit {
            EditState::Editing(target) => Some(target),
            EditState::Idle => None,
        }
    }

    /// Stages `id` for editing, discarding any earlier edit target.
    pub fn begin_edit(&mut self, id: &TransactionId) -> Result<Transaction> {
        let target = self
            .get(id)
            .cloned()
            .ok_or_else(|| BudgetError::TransactionNotFound(id.clone()))?;
        self.edit = EditState::Editing(target.clone());
        Ok(target)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Submits the form: updates the edit target when editing, otherwise creates.
    ///
    /// A rejected draft keeps the edit open; a vanished target closes it.
    pub fn submit(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let Some(target) = self.editing().map(|txn| txn.id.clone()) else {
            return self.create(draft);
        };
        match self.update(&target, draft) {
            Ok(updated) => {
                self.edit = EditState::Idle;
                Ok(updated)
            }
            Err(err @ BudgetError::TransactionNotFound(_)) => {
                self.edit = EditState::Idle;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    pub fn summary(&self) -> Summary {
        SummaryService::summarize(&self.transactions)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        SummaryService::category_totals(&self.transactions)
    }

    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        FilterService::apply(&self.transactions, filter)
    }

    fn commit(&mut self, next: Vec<Transaction>) -> Result<()> {
        self.storage.save(&next)?;
        self.transactions = next;
        Ok(())
    }
}
