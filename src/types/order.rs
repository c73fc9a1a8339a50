//! Order types for the order board.
//!
//! ## Record Shape
//!
//! All records serialize with camelCase field names (`orderType`, `userId`,
//! `coinType`, `orderId`) and the order type as `"BUY"` / `"SELL"`.
//!
//! ## Identity
//!
//! An [`OrderContent`] is what a user submits. It becomes an [`Order`] once
//! placement attaches a unique `order_id`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::BoardItem;

// ============================================================================
// OrderType enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Determines both the filter predicate and the sort direction when a board
/// is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

impl OrderType {
    /// Both sides, bids first
    pub const ALL: [OrderType; 2] = [OrderType::Buy, OrderType::Sell];

    /// Wire spelling of the side
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Buy => "BUY",
            OrderType::Sell => "SELL",
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            OrderType::Buy => OrderType::Sell,
            OrderType::Sell => OrderType::Buy,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = BoardError;

    /// Parses `BUY` / `SELL`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("BUY") {
            Ok(OrderType::Buy)
        } else if trimmed.eq_ignore_ascii_case("SELL") {
            Ok(OrderType::Sell)
        } else {
            Err(BoardError::UnknownOrderType(s.to_string()))
        }
    }
}

// ============================================================================
// OrderContent struct
// ============================================================================

/// The user-supplied payload of a new order, before it has an identity.
///
/// ## Example
///
/// ```
/// use order_board::types::{OrderContent, OrderType};
///
/// let content = OrderContent::new(OrderType::Sell, 8.6, 120.2, "user10", "Ethereum");
/// assert_eq!(content.order_type, OrderType::Sell);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderContent {
    /// Buy or Sell
    pub order_type: OrderType,

    /// Limit price
    pub price: f64,

    /// Quantity offered at `price`
    pub quantity: f64,

    /// Opaque identifier of the submitting user
    pub user_id: String,

    /// Traded asset, e.g. `"Ethereum"`
    pub coin_type: String,
}

impl OrderContent {
    /// Create a new order payload
    pub fn new(
        order_type: OrderType,
        price: f64,
        quantity: f64,
        user_id: impl Into<String>,
        coin_type: impl Into<String>,
    ) -> Self {
        Self {
            order_type,
            price,
            quantity,
            user_id: user_id.into(),
            coin_type: coin_type.into(),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting order: the submitted content plus its unique identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier, assigned once at placement
    pub order_id: String,

    /// Buy or Sell
    pub order_type: OrderType,

    /// Limit price
    pub price: f64,

    /// Resting quantity
    pub quantity: f64,

    /// Opaque identifier of the submitting user
    pub user_id: String,

    /// Traded asset
    pub coin_type: String,
}

impl Order {
    /// Attach an identifier to submitted content
    ///
    /// # Example
    ///
    /// ```
    /// use order_board::types::{Order, OrderContent, OrderType};
    ///
    /// let content = OrderContent::new(OrderType::Buy, 15.5, 100.0, "user1", "Ethereum");
    /// let order = Order::from_content(content.clone(), "order-1");
    ///
    /// assert_eq!(order.order_id, "order-1");
    /// assert_eq!(order.content(), content);
    /// ```
    pub fn from_content(content: OrderContent, order_id: impl Into<String>) -> Self {
        let OrderContent {
            order_type,
            price,
            quantity,
            user_id,
            coin_type,
        } = content;

        Self {
            order_id: order_id.into(),
            order_type,
            price,
            quantity,
            user_id,
            coin_type,
        }
    }

    /// The submitted payload, without the identifier
    pub fn content(&self) -> OrderContent {
        OrderContent {
            order_type: self.order_type,
            price: self.price,
            quantity: self.quantity,
            user_id: self.user_id.clone(),
            coin_type: self.coin_type.clone(),
        }
    }

    /// This order viewed as a single-order price level
    pub fn board_item(&self) -> BoardItem {
        BoardItem::new(self.order_type, self.price, self.quantity)
    }

    /// Check whether this order rests on the given side
    #[inline]
    pub fn is_side(&self, side: OrderType) -> bool {
        self.order_type == side
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
