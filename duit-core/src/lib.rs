//! duit-core: domain types shared by the parser, stores and the chat front end

pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{
    Category, CategoryEntry, EXPENSE_CATEGORIES, INCOME_CATEGORIES, TransactionKind, taxonomy,
};
pub use money::Rupiah;
pub use period::{DateRange, Period, local_date, local_today, parse_timezone, resolve_range};
pub use transaction::{Transaction, TransactionDraft};
