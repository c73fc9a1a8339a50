//! Core data types for the order board
//!
//! ## Types
//!
//! - [`OrderType`]: Buy or Sell
//! - [`OrderContent`]: An order as submitted, without identity
//! - [`Order`]: A resting order with its unique identifier
//! - [`BoardItem`]: An aggregated price level for one side
//!
//! Prices and quantities are `f64`. Summed quantities are rounded with the
//! helpers in [`quantity`].

mod order;
mod board_item;
pub mod quantity;

pub use order::{Order, OrderContent, OrderType};
pub use board_item::BoardItem;
