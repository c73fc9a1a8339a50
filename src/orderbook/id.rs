//! Order identifier generation.
//!
//! Placement asks an [`OrderIdGenerator`] for each new identifier. The
//! default [`UuidGenerator`] returns random v4 UUIDs; tests substitute a
//! [`SequentialIdGenerator`] to get predictable ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique order identifiers
pub trait OrderIdGenerator {
    /// Produce a new identifier, distinct from every earlier one
    fn next_id(&self) -> String;
}

impl<G: OrderIdGenerator + ?Sized> OrderIdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// Random 128-bit identifiers (UUID v4, hyphenated)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl OrderIdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers: `prefix` followed by a counter starting at 1.
///
/// # Example
///
/// ```
/// use order_board::orderbook::{OrderIdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("order");
/// assert_eq!(ids.next_id(), "order1");
/// assert_eq!(ids.next_id(), "order2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id is `{prefix}1`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Get the counter value the next id will use (without incrementing)
    #[inline]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("")
    }
}

impl OrderIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
