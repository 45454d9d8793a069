//! Append-only JSON-lines store: one transaction per line.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use duit_core::{Transaction, TransactionDraft};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::TransactionStore;
use crate::types::{ListFilter, StoredTransaction, select};

#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<StoredTransaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let f = fs::File::open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;

        let mut out = Vec::new();
        for (idx, line) in BufReader::new(f).lines().enumerate() {
            let line = line.with_context(|| format!("read {}", self.path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record: StoredTransaction = serde_json::from_str(&line)
                .with_context(|| format!("parse {} line {}", self.path.display(), idx + 1))?;
            out.push(record);
        }
        Ok(out)
    }

    fn append(&self, record: &StoredTransaction) -> Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        let line = serde_json::to_string(record).context("serialize transaction")?;
        writeln!(f, "{line}").with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl TransactionStore for JsonlStore {
    fn create(&self, user_id: &str, draft: TransactionDraft, today: NaiveDate) -> Result<Transaction> {
        let txn = Transaction::from_draft(Uuid::new_v4().to_string(), draft, today, Utc::now());
        self.append(&StoredTransaction {
            user_id: user_id.to_string(),
            transaction: txn.clone(),
        })?;
        debug!(user_id, id = %txn.id, path = %self.path.display(), "stored transaction");
        Ok(txn)
    }

    fn list(&self, user_id: &str, filter: &ListFilter) -> Result<Vec<Transaction>> {
        let records = self.read_all()?;
        Ok(select(records.iter(), user_id, filter))
    }
}
