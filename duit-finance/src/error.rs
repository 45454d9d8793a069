//! Failure values returned by the parsers. None of them are fatal; callers
//! answer with help text instead.

use thiserror::Error;

/// The amount normalizer could not read a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("no usable digits in amount '{0}'")]
    InvalidNumericLiteral(String),
}

/// Why a message is not a transaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoMatch {
    /// Message does not open with an income or expense verb
    #[error("message does not start with an income or expense keyword")]
    NoTypeKeyword,

    #[error("no amount found in message")]
    NoAmountFound,

    #[error("no usable digits in amount '{0}'")]
    InvalidNumericLiteral(String),

    /// Amount parsed but rounds to zero
    #[error("amount '{0}' is not a positive rupiah value")]
    NonPositiveAmount(String),

    /// Above the per-transaction ceiling
    #[error("amount '{0}' is larger than one quadrillion rupiah")]
    AmountTooLarge(String),
}

impl From<AmountError> for NoMatch {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::InvalidNumericLiteral(token) => NoMatch::InvalidNumericLiteral(token),
        }
    }
}
