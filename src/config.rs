//! Summary options.
//!
//! Options can be built in code, deserialized from a partial record (fields
//! that are absent keep their defaults), or read from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `ORDER_BOARD_PRECISION` | `precision` | 2 |
//! | `ORDER_BOARD_MAX_LISTED` | `max_listed` | 10 |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::types::quantity::DEFAULT_PRECISION;

/// Default number of price levels returned per side
pub const DEFAULT_MAX_LISTED: usize = 10;

/// Environment variable overriding [`SummaryOptions::precision`]
pub const PRECISION_ENV: &str = "ORDER_BOARD_PRECISION";

/// Environment variable overriding [`SummaryOptions::max_listed`]
pub const MAX_LISTED_ENV: &str = "ORDER_BOARD_MAX_LISTED";

/// Controls how a side of the board is summarized.
///
/// # Example
///
/// ```
/// use order_board::SummaryOptions;
///
/// let options: SummaryOptions = serde_json::from_str(r#"{"maxListed": 3}"#).unwrap();
/// assert_eq!(options.max_listed, 3);
/// assert_eq!(options.precision, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOptions {
    /// Decimal places kept when quantities at the same price are summed
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Maximum number of price levels returned
    #[serde(default = "default_max_listed")]
    pub max_listed: usize,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_max_listed() -> usize {
    DEFAULT_MAX_LISTED
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            max_listed: default_max_listed(),
        }
    }
}

impl SummaryOptions {
    /// Set the rounding precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Set the maximum depth
    pub fn with_max_listed(mut self, max_listed: usize) -> Self {
        self.max_listed = max_listed;
        self
    }

    /// Read options from the process environment.
    ///
    /// Unset variables keep their defaults. A variable that is set but does
    /// not parse yields [`BoardError::InvalidOption`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup(PRECISION_ENV) {
            options.precision = parse_option(PRECISION_ENV, &raw)?;
        }
        if let Some(raw) = lookup(MAX_LISTED_ENV) {
            options.max_listed = parse_option(MAX_LISTED_ENV, &raw)?;
        }

        Ok(options)
    }
}

fn parse_option<T: FromStr>(key: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| BoardError::InvalidOption {
        key,
        value: raw.to_string(),
    })
}
