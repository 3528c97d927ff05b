//! Pure domain models: transactions, drafts, categories and derived figures.
//! No I/O and no storage; only data types and core enums.

pub mod category;
pub mod common;
pub mod filter;
pub mod summary;
pub mod transaction;

pub use category::{is_default_category, CategoryShare, CategoryTotal, DEFAULT_CATEGORIES};
pub use common::{Amounted, Displayable, Identifiable};
pub use filter::{KindFilter, TransactionFilter};
pub use summary::Summary;
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};
