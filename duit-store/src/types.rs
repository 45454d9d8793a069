use chrono::NaiveDate;
use duit_core::{Category, DateRange, Transaction, TransactionKind};
use serde::{Deserialize, Serialize};

/// Optional filters for listing a user's transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub kind: Option<TransactionKind>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub category: Option<Category>,
    pub limit: Option<usize>,
}

impl ListFilter {
    /// Everything inside `range`
    pub fn in_range(range: DateRange) -> Self {
        Self {
            start: Some(range.start()),
            end: Some(range.end()),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// True when `txn` passes every filter except `limit`
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.is_none_or(|k| txn.kind == k)
            && self.start.is_none_or(|d| txn.date >= d)
            && self.end.is_none_or(|d| txn.date <= d)
            && self.category.is_none_or(|c| txn.category == c)
    }
}

/// One persisted line: the owner plus the transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredTransaction {
    pub user_id: String,
    #[serde(flatten)]
    pub transaction: Transaction,
}

/// Apply `filter` to transactions given oldest-written first and return them
/// newest first: date descending, then creation time descending. Records
/// written in the same instant keep reverse write order.
pub(crate) fn select<'a>(
    records: impl DoubleEndedIterator<Item = &'a StoredTransaction>,
    user_id: &str,
    filter: &ListFilter,
) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = records
        .rev()
        .filter(|r| r.user_id == user_id && filter.matches(&r.transaction))
        .map(|r| r.transaction.clone())
        .collect();

    out.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

    if let Some(limit) = filter.limit {
        out.truncate(limit);
    }
    out
}
