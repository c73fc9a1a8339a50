//! Decimal rounding of aggregated quantities.
//!
//! ## Overview
//!
//! Quantities are plain `f64`. When two orders share a price their sum is
//! rounded to a fixed number of decimal places before it is stored, and the
//! next addition starts from that rounded value.
//!
//! ## Rounding Rule
//!
//! The exact binary value of the sum is taken into a [`Decimal`], rounded
//! half away from zero, and its decimal text is parsed back into the nearest
//! `f64`. Parsing the text keeps the conversion correctly rounded for large
//! magnitudes, where a direct `Decimal` to `f64` conversion can be off by one
//! ulp. Because the exact binary value is used, `1.005` (stored as
//! `1.00499999...`) rounds down to `1.0`, the same result fixed-point
//! formatting gives.
//!
//! ## Examples
//!
//! ```
//! use order_board::types::quantity::round_to;
//!
//! assert_eq!(round_to(100.0 + 441.8, 2), 541.8);
//! assert_eq!(round_to(0.125, 2), 0.13);
//! assert_eq!(round_to(1.005, 2), 1.0);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Default number of decimal places kept when quantities are summed
pub const DEFAULT_PRECISION: u32 = 2;

/// Round `value` to `precision` decimal places.
///
/// Values a [`Decimal`] cannot hold (NaN, infinities, magnitudes beyond
/// roughly 7.9e28) are returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return value;
    };

    decimal
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Add `quantity` to an already rounded `total` and round the result.
///
/// This is the accumulation step used when a price level absorbs another
/// order.
#[inline]
pub fn accumulate(total: f64, quantity: f64, precision: u32) -> f64 {
    round_to(total + quantity, precision)
}

// ============================================================================
// Unit Tests
// ============================================================================
