//! Deterministic keyword tables: which verbs open an income or expense
//! message, and which words map residual text to a category.
//!
//! Every table is an ordered slice. First match wins, so reordering a table
//! changes results.

use duit_core::{Category, TransactionKind};

/// Leading verbs per kind. Income is checked before expense.
pub const TYPE_KEYWORDS: &[(TransactionKind, &[&str])] = &[
    (TransactionKind::Income, &["masuk", "terima", "dapat"]),
    (TransactionKind::Expense, &["keluar", "bayar", "beli", "belanja"]),
];

pub const INCOME_KEYWORDS: &[(&str, Category)] = &[
    ("gaji", Category::Gaji),
    ("salary", Category::Gaji),
    ("bonus", Category::Bonus),
    ("investasi", Category::Investasi),
    ("saham", Category::Investasi),
    ("bisnis", Category::Bisnis),
    ("usaha", Category::Bisnis),
];

pub const EXPENSE_KEYWORDS: &[(&str, Category)] = &[
    ("makan", Category::Makan),
    ("makanan", Category::Makan),
    ("food", Category::Makan),
    ("jajan", Category::Makan),
    ("transport", Category::Transport),
    ("bensin", Category::Transport),
    ("parkir", Category::Transport),
    ("grab", Category::Transport),
    ("gojek", Category::Transport),
    ("belanja", Category::Belanja),
    ("shopping", Category::Belanja),
    ("beli", Category::Belanja),
    ("tagihan", Category::Tagihan),
    ("listrik", Category::Tagihan),
    ("air", Category::Tagihan),
    ("internet", Category::Tagihan),
    ("pulsa", Category::Tagihan),
    ("hiburan", Category::Hiburan),
    ("nonton", Category::Hiburan),
    ("game", Category::Hiburan),
    ("kesehatan", Category::Kesehatan),
    ("obat", Category::Kesehatan),
    ("dokter", Category::Kesehatan),
    ("pendidikan", Category::Pendidikan),
    ("kursus", Category::Pendidikan),
    ("buku", Category::Pendidikan),
];

/// Category keyword table for a kind
pub fn category_keywords(kind: TransactionKind) -> &'static [(&'static str, Category)] {
    match kind {
        TransactionKind::Income => INCOME_KEYWORDS,
        TransactionKind::Expense => EXPENSE_KEYWORDS,
    }
}

/// A category decided by a keyword found in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit {
    pub keyword: &'static str,
    pub category: Category,
}

/// Find the first keyword of `table` that occurs anywhere in `text`.
pub fn first_keyword_hit(
    text: &str,
    table: &'static [(&'static str, Category)],
) -> Option<KeywordHit> {
    table
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|&(keyword, category)| KeywordHit { keyword, category })
}

/// Categorize lower-cased residual text for `kind`. Falls back to Other.
pub fn categorize(text: &str, kind: TransactionKind) -> Category {
    first_keyword_hit(text, category_keywords(kind))
        .map(|hit| hit.category)
        .unwrap_or(Category::Other)
}

/// Match the opening verb of lower-cased `text`.
///
/// The verb must be followed by a non-letter (or end of text), so "masukan"
/// is not "masuk" but "masuk5jt" is.
pub fn detect_kind(text: &str) -> Option<(TransactionKind, &'static str)> {
    TYPE_KEYWORDS.iter().find_map(|(kind, verbs)| {
        verbs
            .iter()
            .find(|verb| {
                text.strip_prefix(**verb)
                    .is_some_and(|rest| !rest.starts_with(char::is_alphabetic))
            })
            .map(|verb| (*kind, *verb))
    })
}
