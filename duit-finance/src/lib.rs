//! duit-finance: amount normalizer, keyword rules, transaction parser,
//! command tokenizer, and summary aggregator

pub mod amount;
pub mod category_rules;
pub mod command;
pub mod error;
pub mod parser;
pub mod summary;

pub use amount::normalize_amount;
pub use category_rules::categorize;
pub use command::{CommandRequest, parse_command};
pub use error::{AmountError, NoMatch};
pub use parser::parse_transaction;
pub use summary::{Summary, compute_summary};
