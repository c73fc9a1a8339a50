//! Order cancellation.
//!
//! Cancelling an id that is not on the board is a no-op, not an error: the
//! returned board compares equal to the input.

use tracing::debug;

use crate::types::Order;

/// Cancel every order whose id equals `order_id`.
///
/// Untouched orders keep their relative order. Ids are unique in boards
/// built by [`place_order`](crate::orderbook::place_order), so at most one
/// order is normally removed.
///
/// # Example
///
/// ```
/// use order_board::orderbook::{cancel_order, place_order};
/// use order_board::types::{OrderContent, OrderType};
///
/// let board = place_order(&[], OrderContent::new(OrderType::Buy, 15.5, 100.0, "u1", "Ethereum"));
/// let id = board[0].order_id.clone();
///
/// assert!(cancel_order(&board, &id).is_empty());
/// assert_eq!(cancel_order(&board, "wrongId"), board);
/// ```
pub fn cancel_order(board: &[Order], order_id: &str) -> Vec<Order> {
    let remaining: Vec<Order> = board
        .iter()
        .filter(|order| order.order_id != order_id)
        .cloned()
        .collect();

    let removed = board.len() - remaining.len();
    if removed == 0 {
        debug!(order_id, board_len = board.len(), "cancel matched no resting order");
    } else {
        debug!(order_id, removed, board_len = remaining.len(), "cancelled order");
    }

    remaining
}

// ============================================================================
// Unit Tests
// ============================================================================
