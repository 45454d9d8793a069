//! duit-store: where parsed transactions live, plus spreadsheet export.

pub mod export;
pub mod jsonl;
pub mod memory;
pub mod types;

use anyhow::Result;
use chrono::NaiveDate;
use duit_core::{Transaction, TransactionDraft};

pub use export::{export_csv, write_csv};
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use types::{ListFilter, StoredTransaction};

/// Persistence for chat users' transactions
pub trait TransactionStore {
    /// Persist a draft for `user_id`, assigning an id and creation time.
    /// A draft without a date is recorded on `today`.
    fn create(&self, user_id: &str, draft: TransactionDraft, today: NaiveDate) -> Result<Transaction>;

    /// The user's transactions matching `filter`, newest date first, ties by
    /// newest creation time.
    fn list(&self, user_id: &str, filter: &ListFilter) -> Result<Vec<Transaction>>;
}
