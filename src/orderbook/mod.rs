//! Order board operations.
//!
//! ## Ownership Model
//!
//! The board is a plain `Vec<Order>` owned by the caller. Every operation
//! borrows it as `&[Order]` and returns a new, independently owned value:
//!
//! - [`place_order`]: board plus one newly identified order
//! - [`cancel_order`]: board minus the order with a given id
//! - [`summarize`]: aggregated price levels for one side
//!
//! Nothing here holds state between calls, so callers that share a board
//! across threads guard it themselves (one lock or one writer task).
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Place order | O(n) copy |
//! | Cancel order | O(n) |
//! | Summarize side | O(n * L + L log L), L = distinct prices |
//!
//! ## Example
//!
//! ```
//! use order_board::orderbook::{cancel_order, place_order, summarize};
//! use order_board::types::{OrderContent, OrderType};
//!
//! let board = place_order(&[], OrderContent::new(OrderType::Sell, 15.5, 100.0, "u1", "Ethereum"));
//! let board = place_order(&board, OrderContent::new(OrderType::Sell, 15.5, 441.8, "u2", "Ethereum"));
//!
//! let asks = summarize(&board, OrderType::Sell);
//! assert_eq!(asks[0].quantity, 541.8);
//!
//! let board = cancel_order(&board, &board[0].order_id);
//! assert_eq!(board.len(), 1);
//! ```

pub mod id;
pub mod placer;
pub mod canceller;
pub mod aggregator;

pub use id::{OrderIdGenerator, SequentialIdGenerator, UuidGenerator};
pub use placer::{place_order, place_order_with};
pub use canceller::cancel_order;
pub use aggregator::{summarize, summarize_book, summarize_with, BookSnapshot};
