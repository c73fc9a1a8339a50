//! # Order Board
//!
//! In-memory order board for a simple trading venue.
//!
//! ## Architecture
//!
//! - **Types**: Core records (Order, OrderContent, BoardItem)
//! - **OrderBook**: Pure place / cancel / summarize operations
//! - **Config**: Summary options (precision, depth)
//!
//! ## Design Principles
//!
//! 1. **No hidden state**: the caller owns the board; every operation
//!    borrows it and returns a fresh value
//! 2. **Total operations**: placing, cancelling and summarizing never fail
//! 3. **Pluggable ids**: identifiers come from an [`OrderIdGenerator`]
//! 4. **Synchronous**: no I/O, no blocking, no async
//!
//! Orders are only recorded and summarized here; nothing is matched or
//! executed.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, OrderContent, BoardItem
pub mod types;

/// Board operations: placement, cancellation, aggregation
pub mod orderbook;

/// Summary options
pub mod config;

/// Crate error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{BoardItem, Order, OrderContent, OrderType};
pub use orderbook::{
    cancel_order, place_order, place_order_with, summarize, summarize_book, summarize_with,
    BookSnapshot, OrderIdGenerator, SequentialIdGenerator, UuidGenerator,
};
pub use config::SummaryOptions;
pub use error::{BoardError, Result};
