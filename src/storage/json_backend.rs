use chrono::Utc;
use std::{
    collections::HashSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        errors::BudgetError,
        utils::{ensure_dir, PathResolver},
    },
    domain::Transaction,
};

use super::{CorruptDataPolicy, DocumentError, Result, StorageBackend};

const QUARANTINE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S%.f";
const TMP_SUFFIX: &str = "tmp";

/// Stores the transaction list as one pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    path: PathBuf,
    on_corrupt: CorruptDataPolicy,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, on_corrupt: CorruptDataPolicy) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let path = PathResolver::transactions_file_in(&root);
        Ok(Self {
            root,
            path,
            on_corrupt,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// Location of the transactions document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the unreadable document so the next save starts fresh.
    fn quarantine(&self) -> Result<PathBuf> {
        let stem = self
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("transactions");
        let timestamp = Utc::now().format(QUARANTINE_TIMESTAMP_FORMAT).to_string();
        let target = free_quarantine_path(&self.root, stem, &timestamp);
        fs::rename(&self.path, &target)?;
        Ok(target)
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no stored transactions yet");
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        match parse_transactions(&data) {
            Ok(transactions) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded transactions"
                );
                Ok(transactions)
            }
            Err(err) => match self.on_corrupt {
                CorruptDataPolicy::Fail => Err(BudgetError::CorruptData {
                    path: self.path.clone(),
                    message: err.to_string(),
                }),
                CorruptDataPolicy::Quarantine => {
                    let moved = self.quarantine()?;
                    tracing::warn!(
                        error = %err,
                        quarantined = %moved.display(),
                        "stored transactions were unreadable; starting empty"
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        save_transactions_to_path(transactions, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}

/// First `<stem>.corrupt-<stamp>[-n].json` in `root` that does not exist yet.
fn free_quarantine_path(root: &Path, stem: &str, stamp: &str) -> PathBuf {
    let mut target = root.join(format!("{}.corrupt-{}.json", stem, stamp));
    let mut attempt = 1u32;
    while target.exists() {
        target = root.join(format!("{}.corrupt-{}-{}.json", stem, stamp, attempt));
        attempt += 1;
    }
    target
}

/// Parses a stored document into transactions, rejecting repeated ids.
pub fn parse_transactions(data: &str) -> std::result::Result<Vec<Transaction>, DocumentError> {
    let transactions: Vec<Transaction> = serde_json::from_str(data)?;
    let mut seen = HashSet::with_capacity(transactions.len());
    for txn in &transactions {
        if !seen.insert(&txn.id) {
            return Err(DocumentError::DuplicateId(txn.id.clone()));
        }
    }
    Ok(transactions)
}

/// Writes the list atomically by staging to a temporary sibling file.
pub fn save_transactions_to_path(transactions: &[Transaction], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(transactions)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_transactions_from_path(path: &Path) -> Result<Vec<Transaction>> {
    let data = fs::read_to_string(path)?;
    parse_transactions(&data).map_err(|err| BudgetError::CorruptData {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
