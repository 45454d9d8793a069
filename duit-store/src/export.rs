//! Spreadsheet export as CSV with Indonesian column headers.

use anyhow::{Context, Result};
use duit_core::Transaction;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Tanggal")]
    date: String,
    #[serde(rename = "Tipe")]
    kind: &'static str,
    #[serde(rename = "Kategori")]
    category: &'static str,
    #[serde(rename = "Jumlah")]
    amount: i64,
    #[serde(rename = "Keterangan")]
    description: &'a str,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            date: t.date.format("%Y-%m-%d").to_string(),
            kind: t.kind.label(),
            category: t.category.label(),
            amount: t.amount.value(),
            description: t.description.as_deref().unwrap_or("-"),
        }
    }
}

/// Write transactions as CSV rows in the order given
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if transactions.is_empty() {
        wtr.write_record(["Tanggal", "Tipe", "Kategori", "Jumlah", "Keterangan"])?;
    }
    for t in transactions {
        wtr.serialize(ExportRow::from(t)).context("write csv row")?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}

/// Export to a file at `path`, replacing it
pub fn export_csv(transactions: &[Transaction], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(transactions, f).with_context(|| format!("export {}", path.display()))
}
