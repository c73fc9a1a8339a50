//! Aggregated price level shown on the board.

use serde::{Deserialize, Serialize};

use crate::types::OrderType;

/// Total resting quantity at one price for one side.
///
/// Board items are derived: they are rebuilt from the order sequence on
/// every summary and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardItem {
    /// Summed quantity at this price, rounded after each accumulation
    pub quantity: f64,

    /// Price of the level
    pub price: f64,

    /// Side the level belongs to
    pub order_type: OrderType,
}

impl BoardItem {
    /// Create a price level
    pub fn new(order_type: OrderType, price: f64, quantity: f64) -> Self {
        Self {
            quantity,
            price,
            order_type,
        }
    }
}
