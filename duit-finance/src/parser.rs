//! Natural-language transaction parser.
//!
//! "keluar 50rb makan siang" becomes an expense of Rp 50.000 in Makan with
//! description "siang". The opening verb decides the kind, the first number
//! is the amount, and the rest feeds category and description.

use duit_core::{Category, Rupiah, TransactionDraft};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::amount::normalize_amount;
use crate::category_rules::{category_keywords, detect_kind, first_keyword_hit};
use crate::error::NoMatch;

/// ASCII digits with optional `.`/`,` groups, then an optional magnitude marker.
/// Longer markers come first so "juta" is not read as "j" + junk.
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[0-9]+(?:[.,][0-9]+)*(?:\s*(?:ribu|rb|juta|jt|milyar|m|k)\b)?")
            .expect("invalid amount regex")
    })
}

/// Parse a chat message into a transaction draft.
///
/// The draft carries no date; the store fills in today.
pub fn parse_transaction(message: &str) -> Result<TransactionDraft, NoMatch> {
    let text = message.trim().to_lowercase();

    let (kind, verb) = detect_kind(&text).ok_or(NoMatch::NoTypeKeyword)?;

    let amount_text = amount_re()
        .find(&text)
        .map(|m| m.as_str().to_string())
        .ok_or(NoMatch::NoAmountFound)?;

    let magnitude = normalize_amount(&amount_text)?;
    if magnitude > Rupiah::MAX_ENTRY.value() as f64 {
        return Err(NoMatch::AmountTooLarge(amount_text));
    }
    let amount = Rupiah::from_magnitude(magnitude)
        .filter(Rupiah::is_valid_entry)
        .ok_or_else(|| NoMatch::NonPositiveAmount(amount_text.clone()))?;

    let without_verb = text.strip_prefix(verb).unwrap_or(&text);
    let residual = normalize_spaces(&without_verb.replacen(&amount_text, " ", 1));

    let (category, description) = match first_keyword_hit(&residual, category_keywords(kind)) {
        Some(hit) => (hit.category, drop_word_containing(&residual, hit.keyword)),
        None => (Category::Other, residual.clone()),
    };

    debug!(?kind, %amount, %category, residual = %residual, "parsed transaction");

    Ok(TransactionDraft::new(kind, amount, category).with_description(description))
}

fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove the first word that contains `keyword`; the category already
/// records it.
fn drop_word_containing(text: &str, keyword: &str) -> String {
    let mut dropped = false;
    text.split_whitespace()
        .filter(|word| {
            if !dropped && word.contains(keyword) {
                dropped = true;
                return false;
            }
            true
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use duit_core::TransactionKind;

    #[test]
    fn test_income_with_category_only() {
        let draft = parse_transaction("masuk 5jt gaji").unwrap();
        assert_eq!(draft.kind, TransactionKind::Income);
        assert_eq!(draft.amount, Rupiah::new(5_000_000));
        assert_eq!(draft.category, Category::Gaji);
        assert_eq!(draft.description, None);
        assert_eq!(draft.date, None);
    }

    #[test]
    fn test_expense_keeps_remaining_words() {
        let draft = parse_transaction("keluar 50rb makan siang").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, Rupiah::new(50_000));
        assert_eq!(draft.category, Category::Makan);
        assert_eq!(draft.description.as_deref(), Some("siang"));
    }

    #[test]
    fn test_amount_after_words() {
        let draft = parse_transaction("Bayar listrik 500rb bulan ini").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, Rupiah::new(500_000));
        assert_eq!(draft.category, Category::Tagihan);
        assert_eq!(draft.description.as_deref(), Some("bulan ini"));
    }

    #[test]
    fn test_decimal_and_spaced_markers() {
        let draft = parse_transaction("terima bonus 1.5jt").unwrap();
        assert_eq!(draft.amount, Rupiah::new(1_500_000));
        assert_eq!(draft.category, Category::Bonus);

        let draft = parse_transaction("dapat 2,5 juta dari usaha kue").unwrap();
        assert_eq!(draft.amount, Rupiah::new(2_500_000));
        assert_eq!(draft.category, Category::Bisnis);
        assert_eq!(draft.description.as_deref(), Some("dari kue"));
    }

    #[test]
    fn test_plain_grouped_amount() {
        let draft = parse_transaction("beli obat 125.000 apotek").unwrap();
        assert_eq!(draft.amount, Rupiah::new(125_000));
        assert_eq!(draft.category, Category::Kesehatan);
        assert_eq!(draft.description.as_deref(), Some("apotek"));
    }

    #[test]
    fn test_marker_needs_word_end() {
        // "m" of "makan" is not a billion marker
        let draft = parse_transaction("keluar 20000 makan").unwrap();
        assert_eq!(draft.amount, Rupiah::new(20_000));
        assert_eq!(draft.category, Category::Makan);
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let draft = parse_transaction("keluar 75rb sumbangan masjid").unwrap();
        assert_eq!(draft.category, Category::Other);
        assert_eq!(draft.description.as_deref(), Some("sumbangan masjid"));
    }

    #[test]
    fn test_no_type_keyword() {
        assert_eq!(parse_transaction("halo apa kabar"), Err(NoMatch::NoTypeKeyword));
        assert_eq!(parse_transaction(""), Err(NoMatch::NoTypeKeyword));
        assert_eq!(parse_transaction("50rb makan"), Err(NoMatch::NoTypeKeyword));
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(parse_transaction("keluar makan siang"), Err(NoMatch::NoAmountFound));
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            parse_transaction("keluar 0 makan"),
            Err(NoMatch::NonPositiveAmount("0".to_string()))
        );
    }

    #[test]
    fn test_amount_ceiling() {
        let draft = parse_transaction("masuk 1000000000jt gaji").unwrap();
        assert_eq!(draft.amount, Rupiah::MAX_ENTRY);

        assert_eq!(
            parse_transaction("masuk 9000000000m gaji"),
            Err(NoMatch::AmountTooLarge("9000000000m".to_string()))
        );
        assert_eq!(
            parse_transaction("masuk 99999999999999999999999 gaji"),
            Err(NoMatch::AmountTooLarge("99999999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_only_ascii_digits_form_amounts() {
        // Arabic-Indic digits are skipped, the ASCII amount after them is used
        let draft = parse_transaction("keluar ٥٠ 50rb makan").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, Rupiah::new(50_000));
        assert_eq!(draft.category, Category::Makan);

        assert_eq!(parse_transaction("keluar ٥٠ makan"), Err(NoMatch::NoAmountFound));
    }

    #[test]
    fn test_first_declared_keyword_wins_in_residual() {
        // "beli" as the verb is stripped; "makan" beats "buku" by table order
        let draft = parse_transaction("beli 30rb buku makan").unwrap();
        assert_eq!(draft.category, Category::Makan);
        assert_eq!(draft.description.as_deref(), Some("buku"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let msg = "keluar 50rb makan siang";
        assert_eq!(parse_transaction(msg), parse_transaction(msg));
    }
}
