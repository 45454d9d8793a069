//! Transaction kinds and the fixed category taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of money flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionKind {
    /// Indonesian label used in replies and exports
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Pemasukan",
            TransactionKind::Expense => "Pengeluaran",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TransactionKind::Income => "💰",
            TransactionKind::Expense => "💸",
        }
    }

    /// `+` for income, `-` for expense
    pub fn sign(&self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category labels, declared in taxonomy order.
///
/// `Other` is shared by both kinds and is shown to users as `Lainnya`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Gaji,
    Bonus,
    Investasi,
    Bisnis,
    Makan,
    Transport,
    Belanja,
    Tagihan,
    Hiburan,
    Kesehatan,
    Pendidikan,
    #[serde(rename = "Lainnya")]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gaji => "Gaji",
            Category::Bonus => "Bonus",
            Category::Investasi => "Investasi",
            Category::Bisnis => "Bisnis",
            Category::Makan => "Makan",
            Category::Transport => "Transport",
            Category::Belanja => "Belanja",
            Category::Tagihan => "Tagihan",
            Category::Hiburan => "Hiburan",
            Category::Kesehatan => "Kesehatan",
            Category::Pendidikan => "Pendidikan",
            Category::Other => "Lainnya",
        }
    }

    /// True when this category appears in the taxonomy for `kind`
    pub fn belongs_to(&self, kind: TransactionKind) -> bool {
        taxonomy(kind).iter().any(|entry| entry.category == *self)
    }

    /// Display glyph for this category under `kind`, if it belongs there
    pub fn glyph(&self, kind: TransactionKind) -> Option<&'static str> {
        taxonomy(kind)
            .iter()
            .find(|entry| entry.category == *self)
            .map(|entry| entry.glyph)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        INCOME_CATEGORIES
            .iter()
            .chain(EXPENSE_CATEGORIES)
            .map(|entry| entry.category)
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .or_else(|| wanted.eq_ignore_ascii_case("other").then_some(Category::Other))
            .ok_or_else(|| format!("unknown category: {wanted}"))
    }
}

/// One row of the taxonomy: a category and the glyph shown next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: Category,
    pub glyph: &'static str,
}

const fn entry(category: Category, glyph: &'static str) -> CategoryEntry {
    CategoryEntry { category, glyph }
}

pub const INCOME_CATEGORIES: &[CategoryEntry] = &[
    entry(Category::Gaji, "💰"),
    entry(Category::Bonus, "🎁"),
    entry(Category::Investasi, "📈"),
    entry(Category::Bisnis, "💼"),
    entry(Category::Other, "💵"),
];

pub const EXPENSE_CATEGORIES: &[CategoryEntry] = &[
    entry(Category::Makan, "🍔"),
    entry(Category::Transport, "🚗"),
    entry(Category::Belanja, "🛒"),
    entry(Category::Tagihan, "📄"),
    entry(Category::Hiburan, "🎮"),
    entry(Category::Kesehatan, "💊"),
    entry(Category::Pendidikan, "📚"),
    entry(Category::Other, "💸"),
];

/// Ordered taxonomy for a transaction kind
pub fn taxonomy(kind: TransactionKind) -> &'static [CategoryEntry] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_shared_and_last() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            let cats = taxonomy(kind);
            assert_eq!(cats.last().unwrap().category, Category::Other);
            assert!(Category::Other.belongs_to(kind));
        }
    }

    #[test]
    fn test_kinds_do_not_share_named_categories() {
        assert!(Category::Gaji.belongs_to(TransactionKind::Income));
        assert!(!Category::Gaji.belongs_to(TransactionKind::Expense));
        assert!(Category::Makan.belongs_to(TransactionKind::Expense));
        assert!(!Category::Makan.belongs_to(TransactionKind::Income));
    }

    #[test]
    fn test_glyph_depends_on_kind_for_other() {
        assert_eq!(Category::Other.glyph(TransactionKind::Income), Some("💵"));
        assert_eq!(Category::Other.glyph(TransactionKind::Expense), Some("💸"));
        assert_eq!(Category::Makan.glyph(TransactionKind::Income), None);
    }

    #[test]
    fn test_parse_label_case_insensitive() {
        assert_eq!("tagihan".parse::<Category>().unwrap(), Category::Tagihan);
        assert_eq!("LAINNYA".parse::<Category>().unwrap(), Category::Other);
        assert_eq!("other".parse::<Category>().unwrap(), Category::Other);
        assert!("liburan".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::Other).unwrap();
        assert_eq!(json, "\"Lainnya\"");
        let kind = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(kind, "\"expense\"");
        let back: Category = serde_json::from_str("\"Gaji\"").unwrap();
        assert_eq!(back, Category::Gaji);
    }
}
