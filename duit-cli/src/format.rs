//! Indonesian chat replies.

use chrono::{Datelike, NaiveDate};
use duit_core::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction};
use duit_finance::Summary;
use std::fmt::Write;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// "18 Okt 2026"
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

pub fn transaction_confirmation(txn: &Transaction, month: Option<&Summary>) -> String {
    let mut msg = String::from("✅ *Transaksi Tercatat!*\n\n");
    let _ = writeln!(msg, "{} *{}:* {}", txn.kind.glyph(), txn.kind.label(), txn.amount);
    let _ = writeln!(msg, "📁 *Kategori:* {}", txn.category);
    if let Some(desc) = &txn.description {
        let _ = writeln!(msg, "📝 *Keterangan:* {}", desc);
    }
    let _ = writeln!(msg, "📅 *Tanggal:* {}", format_date(txn.date));

    if let Some(s) = month {
        msg.push_str("\n💰 *Saldo Bulan Ini:*\n");
        let _ = writeln!(msg, "   Masuk: {}", s.total_income);
        let _ = writeln!(msg, "   Keluar: {}", s.total_expense);
        let _ = write!(msg, "   Sisa: {}", s.balance);
    }
    msg
}

pub fn summary(s: &Summary, period_label: &str) -> String {
    let mut msg = format!("💰 *Ringkasan {}*\n\n", period_label);
    let _ = writeln!(msg, "📈 *Pemasukan:* {}", s.total_income);
    let _ = writeln!(msg, "📉 *Pengeluaran:* {}", s.total_expense);
    let _ = writeln!(msg, "💵 *Saldo:* {}", s.balance);
    let _ = writeln!(msg, "📊 *Total Transaksi:* {}", s.transaction_count);

    let expenses = s.expense_breakdown();
    if !expenses.is_empty() {
        msg.push_str("\n*Pengeluaran per Kategori:*\n");
        for (category, amount) in expenses {
            let _ = writeln!(msg, "  • {}: {}", category, amount);
        }
    }
    msg
}

/// Numbered list of the first `limit` transactions
pub fn transaction_list(txns: &[Transaction], limit: usize) -> String {
    if txns.is_empty() {
        return "📭 Belum ada transaksi.".to_string();
    }

    let mut msg = String::from("📋 *Transaksi Terakhir:*\n\n");
    for (i, t) in txns.iter().take(limit).enumerate() {
        let _ = writeln!(
            msg,
            "{}. {} {}{} [Ref: {}]",
            i + 1,
            t.kind.glyph(),
            t.kind.sign(),
            t.amount,
            t.short_ref()
        );
        msg.push_str("   ");
        msg.push_str(t.category.label());
        if let Some(desc) = &t.description {
            let _ = write!(msg, " - {}", desc);
        }
        let _ = write!(msg, "\n   {}\n\n", format_date(t.date));
    }

    if txns.len() > limit {
        let _ = write!(msg, "_... dan {} transaksi lainnya_", txns.len() - limit);
    }
    msg
}

pub fn help(bot_name: &str) -> String {
    let mut msg = format!("🤖 *{} - Panduan*\n\n", bot_name);
    msg.push_str("*Cara Cepat (Natural Language):*\n");
    msg.push_str("• Masuk 5jt gaji\n");
    msg.push_str("• Keluar 50rb makan siang\n");
    msg.push_str("• Bayar listrik 500rb\n");
    msg.push_str("• Terima bonus 2jt\n\n");

    msg.push_str("*Perintah Bot:*\n");
    msg.push_str("/catat <transaksi> - Catat transaksi (contoh: /catat keluar 50rb makan)\n");
    msg.push_str("/transaksi [jumlah] - Lihat daftar & Ref ID\n");
    msg.push_str("/saldo - Lihat saldo bulan ini\n");
    msg.push_str("/laporan [periode] - Laporan (hari ini, kemarin, minggu ini, bulan ini)\n");
    msg.push_str("/kategori - Lihat daftar kategori\n");
    msg.push_str("/help - Tampilkan panduan ini\n\n");

    msg.push_str("*Format Angka:*\n");
    msg.push_str("• 50rb atau 50ribu = 50.000\n");
    msg.push_str("• 5jt atau 5juta = 5.000.000\n");
    msg.push_str("• 1.5jt = 1.500.000\n\n");

    msg.push_str("_Kirim pesan untuk mulai mencatat!_ 📝");
    msg
}

pub fn category_list() -> String {
    let mut msg = String::from("📁 *Daftar Kategori*\n\n");
    msg.push_str("*Pemasukan:*\n");
    for entry in INCOME_CATEGORIES {
        let _ = writeln!(msg, "{} {}", entry.glyph, entry.category);
    }
    msg.push_str("\n*Pengeluaran:*\n");
    for entry in EXPENSE_CATEGORIES {
        let _ = writeln!(msg, "{} {}", entry.glyph, entry.category);
    }
    msg
}

pub fn error(detail: &str) -> String {
    format!(
        "❌ *Maaf, terjadi kesalahan*\n\n{}\n\nSilakan coba lagi atau ketik /help untuk bantuan.",
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use duit_core::{Category, Rupiah, TransactionDraft, TransactionKind};
    use duit_finance::compute_summary;

    fn txn(id: &str, kind: TransactionKind, amount: i64, category: Category, desc: &str) -> Transaction {
        Transaction::from_draft(
            id,
            TransactionDraft::new(kind, Rupiah::new(amount), category).with_description(desc),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 18, 1, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_format_date_indonesian_months() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_date(d), "18 Okt 2026");
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert_eq!(format_date(d), "1 Mei 2026");
    }

    #[test]
    fn test_confirmation_with_month_summary() {
        let t = txn("abcd1234-x", TransactionKind::Expense, 50_000, Category::Makan, "siang");
        let s = compute_summary(std::slice::from_ref(&t));
        let msg = transaction_confirmation(&t, Some(&s));
        assert!(msg.contains("💸 *Pengeluaran:* Rp 50.000"));
        assert!(msg.contains("📁 *Kategori:* Makan"));
        assert!(msg.contains("📝 *Keterangan:* siang"));
        assert!(msg.contains("📅 *Tanggal:* 18 Okt 2026"));
        assert!(msg.ends_with("Sisa: -Rp 50.000"));
    }

    #[test]
    fn test_confirmation_without_description_or_summary() {
        let t = txn("a", TransactionKind::Income, 5_000_000, Category::Gaji, "");
        let msg = transaction_confirmation(&t, None);
        assert!(!msg.contains("Keterangan"));
        assert!(!msg.contains("Saldo Bulan Ini"));
    }

    #[test]
    fn test_summary_lists_expenses_largest_first() {
        let s = compute_summary(&[
            txn("a", TransactionKind::Expense, 50_000, Category::Makan, ""),
            txn("b", TransactionKind::Expense, 500_000, Category::Tagihan, ""),
            txn("c", TransactionKind::Income, 5_000_000, Category::Gaji, ""),
        ]);
        let msg = summary(&s, "Bulan Ini");
        assert!(msg.starts_with("💰 *Ringkasan Bulan Ini*"));
        assert!(msg.contains("💵 *Saldo:* Rp 4.450.000"));
        assert!(msg.contains("📊 *Total Transaksi:* 3"));
        let tagihan = msg.find("Tagihan").unwrap();
        let makan = msg.find("Makan").unwrap();
        assert!(tagihan < makan);
    }

    #[test]
    fn test_list_truncates_with_remainder() {
        let txns: Vec<_> = (0..3)
            .map(|i| txn(&format!("ref{i}xyz-1"), TransactionKind::Expense, 1_000, Category::Other, ""))
            .collect();
        let msg = transaction_list(&txns, 2);
        assert!(msg.contains("1. 💸 -Rp 1.000 [Ref: ref0]"));
        assert!(msg.contains("2. "));
        assert!(!msg.contains("3. "));
        assert!(msg.ends_with("_... dan 1 transaksi lainnya_"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(transaction_list(&[], 10), "📭 Belum ada transaksi.");
    }

    #[test]
    fn test_category_list_has_both_sections() {
        let msg = category_list();
        assert!(msg.contains("💵 Lainnya"));
        assert!(msg.contains("💸 Lainnya"));
        assert!(msg.contains("🍔 Makan"));
    }

    #[test]
    fn test_help_only_lists_supported_commands() {
        let msg = help("Money Flow Bot");
        assert!(msg.starts_with("🤖 *Money Flow Bot - Panduan*"));
        assert!(msg.contains("/laporan"));
        assert!(!msg.contains("/undo"));
        assert!(!msg.contains("/hapus"));
    }
}
