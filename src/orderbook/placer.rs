//! Order placement.
//!
//! Placing an order never touches the caller's board: the board is borrowed,
//! copied, and the new order is appended to the copy.

use tracing::debug;

use crate::orderbook::{OrderIdGenerator, UuidGenerator};
use crate::types::{Order, OrderContent};

/// Place an order with a random UUID identifier.
///
/// # Returns
///
/// A new board equal to `board` with the placed order appended at the end
///
/// # Example
///
/// ```
/// use order_board::orderbook::place_order;
/// use order_board::types::{OrderContent, OrderType};
///
/// let content = OrderContent::new(OrderType::Sell, 8.6, 120.2, "user10", "Ethereum");
/// let board = place_order(&[], content.clone());
///
/// assert_eq!(board.len(), 1);
/// assert_eq!(board[0].content(), content);
/// assert!(!board[0].order_id.is_empty());
/// ```
pub fn place_order(board: &[Order], content: OrderContent) -> Vec<Order> {
    place_order_with(board, content, &UuidGenerator)
}

/// Place an order, drawing its identifier from `ids`.
///
/// # Arguments
///
/// * `board` - Current resting orders (left unmodified)
/// * `content` - The submitted order payload
/// * `ids` - Identifier source
pub fn place_order_with<G>(board: &[Order], content: OrderContent, ids: &G) -> Vec<Order>
where
    G: OrderIdGenerator + ?Sized,
{
    let order = Order::from_content(content, ids.next_id());

    debug!(
        order_id = %order.order_id,
        order_type = %order.order_type,
        price = order.price,
        quantity = order.quantity,
        board_len = board.len(),
        "placing order"
    );

    let mut placed = Vec::with_capacity(board.len() + 1);
    placed.extend_from_slice(board);
    placed.push(order);
    placed
}

// ============================================================================
// Unit Tests
// ============================================================================
