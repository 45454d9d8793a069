//! Summary aggregator: folds stored transactions into totals and
//! per-category breakdowns for a report.

use duit_core::{Category, Rupiah, Transaction, TransactionKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Period totals. Rebuilt for every report, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Rupiah,
    pub total_expense: Rupiah,
    /// `total_income - total_expense`
    pub balance: Rupiah,
    pub transaction_count: usize,
    pub income_by_category: BTreeMap<Category, Rupiah>,
    pub expense_by_category: BTreeMap<Category, Rupiah>,
}

impl Summary {
    /// Income categories, largest first
    pub fn income_breakdown(&self) -> Vec<(Category, Rupiah)> {
        ranked(&self.income_by_category)
    }

    /// Expense categories, largest first
    pub fn expense_breakdown(&self) -> Vec<(Category, Rupiah)> {
        ranked(&self.expense_by_category)
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// Descending by amount; equal amounts keep taxonomy order.
fn ranked(map: &BTreeMap<Category, Rupiah>) -> Vec<(Category, Rupiah)> {
    let mut rows: Vec<(Category, Rupiah)> = map.iter().map(|(c, a)| (*c, *a)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Fold transactions into a summary. Input order does not matter.
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut summary = transactions.iter().fold(Summary::default(), |mut acc, txn| {
        let (total, by_category) = match txn.kind {
            TransactionKind::Income => (&mut acc.total_income, &mut acc.income_by_category),
            TransactionKind::Expense => (&mut acc.total_expense, &mut acc.expense_by_category),
        };
        *total += txn.amount;
        *by_category.entry(txn.category).or_default() += txn.amount;
        acc
    });

    summary.transaction_count = transactions.len();
    summary.balance = summary.total_income - summary.total_expense;
    summary
}
