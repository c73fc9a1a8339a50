//! Error type for the crate boundary.
//!
//! The board operations themselves are total and never fail. Errors only
//! arise where text from outside the process is turned into typed values:
//! parsing an [`OrderType`](crate::types::OrderType) and reading
//! [`SummaryOptions`](crate::config::SummaryOptions) from the environment.

use thiserror::Error;

/// Errors raised while converting external input into board types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Order type text was neither `BUY` nor `SELL`
    #[error("unknown order type {0:?}, expected BUY or SELL")]
    UnknownOrderType(String),

    /// A configuration value was present but could not be parsed
    #[error("invalid value {value:?} for {key}")]
    InvalidOption {
        /// Name of the offending setting
        key: &'static str,
        /// Raw value as supplied
        value: String,
    },
}

/// Result alias using [`BoardError`].
pub type Result<T> = std::result::Result<T, BoardError>;
