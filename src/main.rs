//! Order Board - Binary Entry Point
//!
//! Builds a small sample board, cancels one order and prints both sides of
//! the book as JSON. Summary options come from `ORDER_BOARD_PRECISION` and
//! `ORDER_BOARD_MAX_LISTED`; log verbosity from `RUST_LOG`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use order_board::{
    cancel_order, place_order, summarize_book, Order, OrderContent, OrderType, SummaryOptions,
};

fn sample_orders() -> Vec<OrderContent> {
    vec![
        OrderContent::new(OrderType::Sell, 15.5, 100.0, "user1", "Ethereum"),
        OrderContent::new(OrderType::Sell, 23.6, 102.5, "user2", "Ethereum"),
        OrderContent::new(OrderType::Sell, 15.5, 441.8, "user3", "Ethereum"),
        OrderContent::new(OrderType::Buy, 15.5, 100.0, "user4", "Ethereum"),
        OrderContent::new(OrderType::Buy, 15.5, 23.6, "user5", "Ethereum"),
        OrderContent::new(OrderType::Buy, 4.2, 33.5, "user6", "Ethereum"),
        OrderContent::new(OrderType::Buy, 3.9, 12.0, "user7", "Ethereum"),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let options = SummaryOptions::from_env()?;
    info!(precision = options.precision, max_listed = options.max_listed, "summary options loaded");

    let mut board: Vec<Order> = Vec::new();
    for content in sample_orders() {
        board = place_order(&board, content);
    }
    info!(orders = board.len(), "sample board placed");

    if let Some(last) = board.last().map(|order| order.order_id.clone()) {
        board = cancel_order(&board, &last);
        info!(order_id = %last, orders = board.len(), "cancelled last order");
    }

    let snapshot = summarize_book(&board, &options);
    info!(
        best_bid = ?snapshot.best_bid(),
        best_ask = ?snapshot.best_ask(),
        spread = ?snapshot.spread(),
        "book summarized"
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
