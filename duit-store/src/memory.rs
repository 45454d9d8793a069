//! In-memory store, used by tests and throwaway sessions.

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, Utc};
use duit_core::{Transaction, TransactionDraft};
use std::sync::Mutex;
use uuid::Uuid;

use crate::TransactionStore;
use crate::types::{ListFilter, StoredTransaction, select};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredTransaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-materialized transaction (fixtures, imports)
    pub fn insert(&self, user_id: &str, transaction: Transaction) -> Result<()> {
        self.records
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?
            .push(StoredTransaction {
                user_id: user_id.to_string(),
                transaction,
            });
        Ok(())
    }
}

impl TransactionStore for MemoryStore {
    fn create(&self, user_id: &str, draft: TransactionDraft, today: NaiveDate) -> Result<Transaction> {
        let txn = Transaction::from_draft(Uuid::new_v4().to_string(), draft, today, Utc::now());
        self.insert(user_id, txn.clone())?;
        Ok(txn)
    }

    fn list(&self, user_id: &str, filter: &ListFilter) -> Result<Vec<Transaction>> {
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(select(records.iter(), user_id, filter))
    }
}
