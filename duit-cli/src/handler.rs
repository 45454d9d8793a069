//! Message dispatcher: decides whether an inbound chat line is a command or
//! a transaction and builds the reply.

use anyhow::Result;
use chrono::NaiveDate;
use duit_core::{DateRange, Period, TransactionDraft};
use duit_finance::{CommandRequest, Summary, compute_summary, parse_command, parse_transaction};
use duit_store::{ListFilter, TransactionStore};
use tracing::{debug, info, warn};

use crate::format;

/// What a slash command maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Help,
    Balance,
    Report,
    ListTransactions,
    ListCategories,
    AddTransaction,
    Unrecognized,
}

impl Route {
    pub fn from_command(name: &str) -> Self {
        match name {
            "help" | "start" => Route::Help,
            "saldo" | "balance" => Route::Balance,
            "laporan" | "report" => Route::Report,
            "transaksi" | "transactions" => Route::ListTransactions,
            "kategori" | "categories" => Route::ListCategories,
            "catat" | "add" => Route::AddTransaction,
            _ => Route::Unrecognized,
        }
    }
}

pub struct MessageHandler<S> {
    store: S,
    bot_name: String,
    list_limit: usize,
}

impl<S: TransactionStore> MessageHandler<S> {
    pub fn new(store: S, bot_name: impl Into<String>, list_limit: usize) -> Self {
        Self {
            store,
            bot_name: bot_name.into(),
            list_limit,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reply to one inbound message. Blank messages get no reply.
    ///
    /// `today` is the caller's snapshot of the local date; every range in the
    /// reply is derived from it.
    pub fn handle(&self, user_id: &str, text: &str, today: NaiveDate) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        info!(user_id, "message received");
        debug!(user_id, text, "message text");

        if let Some(req) = parse_command(text) {
            return Some(self.dispatch(user_id, &req, today));
        }

        match parse_transaction(text) {
            Ok(draft) => Some(self.record(user_id, draft, today)),
            Err(reason) => {
                debug!(%reason, "not a transaction, sending help");
                Some(format::help(&self.bot_name))
            }
        }
    }

    fn dispatch(&self, user_id: &str, req: &CommandRequest, today: NaiveDate) -> String {
        let route = Route::from_command(&req.command);
        debug!(command = %req.command, ?route, "dispatching command");

        match route {
            Route::Help => format::help(&self.bot_name),
            Route::Balance => self.balance(user_id, today),
            Route::Report => self.report(user_id, &req.rest(), today),
            Route::ListTransactions => self.list(user_id, &req.args),
            Route::ListCategories => format::category_list(),
            Route::AddTransaction => match parse_transaction(&req.rest()) {
                Ok(draft) => self.record(user_id, draft, today),
                Err(reason) => {
                    debug!(%reason, "invalid /catat arguments");
                    format::error(
                        "Format tidak valid. Contoh: /catat masuk 5jt gaji atau /catat keluar 50rb makan",
                    )
                }
            },
            Route::Unrecognized => format::error(&format!(
                "Perintah \"{}\" tidak dikenali. Ketik /help untuk bantuan.",
                req.command
            )),
        }
    }

    fn summarize(&self, user_id: &str, range: DateRange) -> Result<Summary> {
        let txns = self.store.list(user_id, &ListFilter::in_range(range))?;
        Ok(compute_summary(&txns))
    }

    fn record(&self, user_id: &str, draft: TransactionDraft, today: NaiveDate) -> String {
        let txn = match self.store.create(user_id, draft, today) {
            Ok(txn) => txn,
            Err(err) => {
                warn!(user_id, error = %format!("{err:#}"), "failed to store transaction");
                return format::error("Gagal menyimpan transaksi. Silakan coba lagi.");
            }
        };
        info!(user_id, id = %txn.id, kind = ?txn.kind, amount = %txn.amount, "transaction recorded");

        let month = match self.summarize(user_id, Period::ThisMonth.range(today)) {
            Ok(s) => Some(s),
            Err(err) => {
                warn!(user_id, error = %format!("{err:#}"), "failed to load month summary");
                None
            }
        };
        format::transaction_confirmation(&txn, month.as_ref())
    }

    fn balance(&self, user_id: &str, today: NaiveDate) -> String {
        let period = Period::ThisMonth;
        match self.summarize(user_id, period.range(today)) {
            Ok(s) => format::summary(&s, period.label()),
            Err(err) => {
                warn!(user_id, error = %format!("{err:#}"), "failed to load balance");
                format::error("Gagal mengambil data saldo.")
            }
        }
    }

    fn report(&self, user_id: &str, phrase: &str, today: NaiveDate) -> String {
        let period = Period::detect(phrase);
        match self.summarize(user_id, period.range(today)) {
            Ok(s) => format::summary(&s, period.label()),
            Err(err) => {
                warn!(user_id, error = %format!("{err:#}"), "failed to load report");
                format::error("Gagal mengambil laporan.")
            }
        }
    }

    fn list(&self, user_id: &str, args: &[String]) -> String {
        let limit = args
            .first()
            .and_then(|a| a.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(self.list_limit);

        match self.store.list(user_id, &ListFilter::default()) {
            Ok(txns) => format::transaction_list(&txns, limit),
            Err(err) => {
                warn!(user_id, error = %format!("{err:#}"), "failed to list transactions");
                format::error("Gagal mengambil daftar transaksi.")
            }
        }
    }
}
