use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use chrono_tz::Tz;
use duit_core::{DateRange, Period, Transaction, local_today};
use duit_finance::{Summary, compute_summary};
use duit_store::{JsonlStore, ListFilter, TransactionStore, export_csv};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::BufReader;

mod chat;
mod config;
mod format;
mod handler;
mod state;
mod telemetry;

use config::Config;
use handler::MessageHandler;

#[derive(Parser, Debug)]
#[command(
    name = "duit",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DUIT_BUILD_SHA"), ")"),
    about = "Record money flow from Indonesian chat messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat: one message per line, /quit or Ctrl-D to leave
    Chat {
        /// User id (default: config.chat.default_user)
        #[arg(long)]
        user: Option<String>,
    },

    /// Handle a single message and print the reply
    Send {
        #[arg(long)]
        user: Option<String>,

        /// Message text, e.g. `keluar 50rb makan siang` or `/saldo`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Summarize a period (hari ini, kemarin, minggu ini, bulan ini)
    Report {
        #[arg(long)]
        user: Option<String>,

        /// Print JSON instead of the chat reply
        #[arg(long, default_value_t = false)]
        json: bool,

        period: Vec<String>,
    },

    /// Export transactions to a CSV spreadsheet
    Export {
        #[arg(long)]
        user: Option<String>,

        /// Limit to a period phrase; all transactions when omitted
        #[arg(long)]
        period: Option<String>,

        #[arg(long, short)]
        output: PathBuf,
    },

    /// Manage ~/.duit/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    period: Period,
    range: DateRange,
    summary: &'a Summary,
}

/// Everything a store-backed command needs
struct App {
    cfg: Config,
    tz: Tz,
    store: JsonlStore,
}

impl App {
    fn load() -> Result<Self> {
        let cfg = config::load_config()?;
        let tz = cfg.timezone()?;
        let store = JsonlStore::open(state::store_path()?)?;
        Ok(Self { cfg, tz, store })
    }

    fn user(&self, user: Option<String>) -> String {
        user.unwrap_or_else(|| self.cfg.chat.default_user.clone())
    }

    fn handler(&self) -> MessageHandler<JsonlStore> {
        MessageHandler::new(self.store.clone(), self.cfg.bot.name.clone(), self.cfg.chat.list_limit)
    }

    fn today(&self) -> NaiveDate {
        local_today(self.tz)
    }

    fn list(&self, user: &str, filter: &ListFilter) -> Result<Vec<Transaction>> {
        self.store
            .list(user, filter)
            .with_context(|| format!("listing transactions in {}", self.store.path().display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Chat { user } => {
            let app = App::load()?;
            let user = app.user(user);
            let handler = app.handler();
            println!("{}: ketik pesan, /help untuk panduan, /quit untuk keluar.\n", app.cfg.bot.name);
            let stdin = BufReader::new(tokio::io::stdin());
            chat::run_session(&handler, &user, || app.today(), stdin, tokio::io::stdout()).await?;
        }

        Command::Send { user, text } => {
            let app = App::load()?;
            let user = app.user(user);
            if let Some(reply) = app.handler().handle(&user, &text.join(" "), app.today()) {
                println!("{reply}");
            }
        }

        Command::Report { user, json, period } => {
            let app = App::load()?;
            let user = app.user(user);
            let period = Period::detect(&period.join(" "));
            let range = period.range(app.today());
            let summary = compute_summary(&app.list(&user, &ListFilter::in_range(range))?);

            if json {
                let out = ReportJson {
                    period,
                    range,
                    summary: &summary,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", format::summary(&summary, period.label()));
            }
        }

        Command::Export {
            user,
            period,
            output,
        } => {
            let app = App::load()?;
            let user = app.user(user);
            let filter = match period.as_deref() {
                Some(phrase) => ListFilter::in_range(Period::detect(phrase).range(app.today())),
                None => ListFilter::default(),
            };
            let txns = app.list(&user, &filter)?;
            export_csv(&txns, &output)?;
            println!("Exported {} transactions to {}", txns.len(), output.display());
        }
    }

    Ok(())
}
