//! Depth-of-book aggregation.
//!
//! ## Algorithm
//!
//! 1. **Filter**: keep orders on the requested side
//! 2. **Aggregate**: walk orders in board order, merging equal prices into
//!    one [`BoardItem`]; each merge re-rounds the running quantity
//! 3. **Sort**: asks ascending, bids descending (stable, so first-seen
//!    levels win ties)
//! 4. **Truncate**: keep the best `max_listed` levels
//!
//! ## Price Ordering
//!
//! - **Bids** (`Buy`): highest price first
//! - **Asks** (`Sell`): lowest price first
//!
//! ## Example
//!
//! ```
//! use order_board::orderbook::summarize;
//! use order_board::types::{BoardItem, Order, OrderContent, OrderType};
//!
//! let order = |id: &str, side, price, quantity| {
//!     Order::from_content(OrderContent::new(side, price, quantity, "u", "Ethereum"), id)
//! };
//! let orders = vec![
//!     order("1", OrderType::Sell, 15.5, 100.0),
//!     order("2", OrderType::Sell, 23.6, 102.5),
//!     order("3", OrderType::Sell, 15.5, 441.8),
//!     order("4", OrderType::Buy, 15.5, 100.0),
//! ];
//!
//! assert_eq!(
//!     summarize(&orders, OrderType::Sell),
//!     vec![
//!         BoardItem::new(OrderType::Sell, 15.5, 541.8),
//!         BoardItem::new(OrderType::Sell, 23.6, 102.5),
//!     ]
//! );
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SummaryOptions;
use crate::types::quantity::accumulate;
use crate::types::{BoardItem, Order, OrderType};

/// Summarize one side of the board with default options
/// (precision 2, at most 10 levels).
pub fn summarize(orders: &[Order], side: OrderType) -> Vec<BoardItem> {
    summarize_with(orders, side, &SummaryOptions::default())
}

/// Summarize one side of the board.
///
/// # Arguments
///
/// * `orders` - Resting orders, in board order
/// * `side` - Which side to summarize
/// * `options` - Rounding precision and maximum depth
///
/// # Returns
///
/// At most `options.max_listed` price levels, best price first
pub fn summarize_with(orders: &[Order], side: OrderType, options: &SummaryOptions) -> Vec<BoardItem> {
    let mut levels = aggregate_levels(orders, side, options.precision);
    sort_levels(&mut levels, side);

    let total_levels = levels.len();
    levels.truncate(options.max_listed);

    debug!(
        side = %side,
        levels = levels.len(),
        dropped = total_levels - levels.len(),
        "summarized board side"
    );

    levels
}

/// Merge same-price orders of `side` into levels, in first-seen order.
fn aggregate_levels(orders: &[Order], side: OrderType, precision: u32) -> Vec<BoardItem> {
    let mut levels: Vec<BoardItem> = Vec::new();

    for order in orders.iter().filter(|order| order.is_side(side)) {
        match levels.iter_mut().find(|level| level.price == order.price) {
            Some(level) => {
                level.quantity = accumulate(level.quantity, order.quantity, precision);
            }
            None => {
                trace!(side = %side, price = order.price, "new price level");
                levels.push(BoardItem::new(side, order.price, order.quantity));
            }
        }
    }

    levels
}

/// Best price first. Incomparable prices are treated as equal.
fn sort_levels(levels: &mut [BoardItem], side: OrderType) {
    levels.sort_by(|a, b| {
        let ascending = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
        match side {
            OrderType::Sell => ascending,
            OrderType::Buy => ascending.reverse(),
        }
    });
}

// ============================================================================
// Both sides
// ============================================================================

/// Summary of both sides of the board.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Buy levels, highest price first
    pub bids: Vec<BoardItem>,

    /// Sell levels, lowest price first
    pub asks: Vec<BoardItem>,
}

impl BookSnapshot {
    /// Get the best bid price (highest buy price)
    #[inline]
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|level| level.price)
    }

    /// Get the best ask price (lowest sell price)
    #[inline]
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|level| level.price)
    }

    /// Get the spread (best_ask - best_bid)
    ///
    /// # Returns
    ///
    /// The spread, or None if either side is empty or the book is crossed
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    /// Check if both sides are empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Summarize both sides of the board with the same options.
pub fn summarize_book(orders: &[Order], options: &SummaryOptions) -> BookSnapshot {
    BookSnapshot {
        bids: summarize_with(orders, OrderType::Buy, options),
        asks: summarize_with(orders, OrderType::Sell, options),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderContent;

    fn order(id: &str, order_type: OrderType, price: f64, quantity: f64) -> Order {
        Order::from_content(
            OrderContent::new(order_type, price, quantity, "user", "Ethereum"),
            id,
        )
    }

    fn test_orders() -> Vec<Order> {
        vec![
            order("1", OrderType::Sell, 15.5, 100.0),
            order("2", OrderType::Sell, 23.6, 102.5),
            order("3", OrderType::Sell, 15.5, 441.8),
            order("4", OrderType::Buy, 15.5, 100.0),
            order("5", OrderType::Buy, 15.5, 23.6),
            order("6", OrderType::Buy, 4.2, 33.5),
        ]
    }

    #[test]
    fn test_summarize_sell_side() {
        let asks = summarize(&test_orders(), OrderType::Sell);
        assert_eq!(
            asks,
            vec![
                BoardItem::new(OrderType::Sell, 15.5, 541.8),
                BoardItem::new(OrderType::Sell, 23.6, 102.5),
            ]
        );
    }

    #[test]
    fn test_summarize_buy_side() {
        let bids = summarize(&test_orders(), OrderType::Buy);
        assert_eq!(
            bids,
            vec![
                BoardItem::new(OrderType::Buy, 15.5, 123.6),
                BoardItem::new(OrderType::Buy, 4.2, 33.5),
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[], OrderType::Buy).is_empty());

        let only_sells = vec![order("1", OrderType::Sell, 1.0, 1.0)];
        assert!(summarize(&only_sells, OrderType::Buy).is_empty());
    }

    #[test]
    fn test_single_order_level_is_not_rounded() {
        let orders = vec![order("1", OrderType::Sell, 2.0, 0.123456)];
        let asks = summarize(&orders, OrderType::Sell);
        assert_eq!(asks[0].quantity, 0.123456);
    }

    #[test]
    fn test_rounding_applies_per_accumulation() {
        let orders = vec![
            order("1", OrderType::Buy, 1.0, 0.004),
            order("2", OrderType::Buy, 1.0, 0.004),
            order("3", OrderType::Buy, 1.0, 0.004),
            order("4", OrderType::Buy, 1.0, 0.004),
        ];
        let bids = summarize(&orders, OrderType::Buy);
        assert_eq!(bids, vec![BoardItem::new(OrderType::Buy, 1.0, 0.01)]);
    }

    #[test]
    fn test_precision_option() {
        let orders = vec![
            order("1", OrderType::Sell, 1.0, 0.1234),
            order("2", OrderType::Sell, 1.0, 0.0002),
        ];
        let options = SummaryOptions::default().with_precision(3);
        let asks = summarize_with(&orders, OrderType::Sell, &options);
        assert_eq!(asks[0].quantity, 0.124);

        let options = SummaryOptions::default().with_precision(0);
        let asks = summarize_with(&orders, OrderType::Sell, &options);
        assert_eq!(asks[0].quantity, 0.0);
    }

    #[test]
    fn test_truncates_to_best_levels() {
        let orders: Vec<Order> = (1..=15)
            .map(|i| order(&i.to_string(), OrderType::Sell, i as f64, 1.0))
            .chain((1..=15).map(|i| order(&format!("b{i}"), OrderType::Buy, i as f64, 1.0)))
            .collect();

        let asks = summarize(&orders, OrderType::Sell);
        assert_eq!(asks.len(), 10);
        assert_eq!(asks.first().unwrap().price, 1.0);
        assert_eq!(asks.last().unwrap().price, 10.0);

        let bids = summarize(&orders, OrderType::Buy);
        assert_eq!(bids.len(), 10);
        assert_eq!(bids.first().unwrap().price, 15.0);
        assert_eq!(bids.last().unwrap().price, 6.0);

        let options = SummaryOptions::default().with_max_listed(0);
        assert!(summarize_with(&orders, OrderType::Buy, &options).is_empty());
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        // NaN never equals itself, so each order opens its own level
        let orders = vec![
            order("1", OrderType::Sell, f64::NAN, 1.0),
            order("2", OrderType::Sell, f64::NAN, 2.0),
        ];
        let asks = summarize(&orders, OrderType::Sell);
        assert_eq!(asks.len(), 2);
        assert_eq!(asks[0].quantity, 1.0);
        assert_eq!(asks[1].quantity, 2.0);
    }

    #[test]
    fn test_negative_zero_merges_with_zero() {
        let orders = vec![
            order("1", OrderType::Buy, 0.0, 1.0),
            order("2", OrderType::Buy, -0.0, 2.0),
        ];
        let bids = summarize(&orders, OrderType::Buy);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].quantity, 3.0);
    }

    #[test]
    fn test_summarize_book() {
        let snapshot = summarize_book(&test_orders(), &SummaryOptions::default());

        assert_eq!(snapshot.bids.len(), 2);
        assert_eq!(snapshot.asks.len(), 2);
        assert_eq!(snapshot.best_bid(), Some(15.5));
        assert_eq!(snapshot.best_ask(), Some(15.5));
        assert_eq!(snapshot.spread(), Some(0.0));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_spread_edge_cases() {
        let empty = summarize_book(&[], &SummaryOptions::default());
        assert!(empty.is_empty());
        assert!(empty.spread().is_none());

        let crossed = summarize_book(
            &[
                order("1", OrderType::Buy, 20.0, 1.0),
                order("2", OrderType::Sell, 10.0, 1.0),
            ],
            &SummaryOptions::default(),
        );
        assert!(crossed.spread().is_none());
    }
}
