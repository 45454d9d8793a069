//! Transaction drafts produced by the parser and records owned by a store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, TransactionKind};
use crate::money::Rupiah;

/// An unpersisted transaction parsed from a chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    /// Always positive
    pub amount: Rupiah,
    pub category: Category,
    pub description: Option<String>,
    /// `None` means "today" as decided by the store
    pub date: Option<NaiveDate>,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind, amount: Rupiah, category: Category) -> Self {
        Self {
            kind,
            amount,
            category,
            description: None,
            date: None,
        }
    }

    /// Set the description; blank text leaves it absent
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        self.description = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// A stored transaction with store-assigned identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: Rupiah,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Materialize a draft, falling back to `today` when it carries no date
    pub fn from_draft(
        id: impl Into<String>,
        draft: TransactionDraft,
        today: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date.unwrap_or(today),
            created_at,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Short reference shown in listings: first four characters of the id's
    /// leading segment
    pub fn short_ref(&self) -> &str {
        let head = self.id.split('-').next().unwrap_or(&self.id);
        match head.char_indices().nth(4) {
            Some((idx, _)) => &head[..idx],
            None => head,
        }
    }
}
