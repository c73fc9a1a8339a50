//! Benchmarks for the order board.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- summarize
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use order_board::{
    cancel_order, place_order_with, summarize, Order, OrderContent, OrderIdGenerator, OrderType,
    SequentialIdGenerator,
};

// ============================================================================
// HELPER FUNCTIONS - Deterministic board generation
// ============================================================================

/// Generate a board of `count` orders spread over `levels` price levels.
fn generate_board(count: usize, levels: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ids = SequentialIdGenerator::new("bench");
    let mut board = Vec::with_capacity(count);

    for _ in 0..count {
        let order_type = if rng.gen_bool(0.5) { OrderType::Buy } else { OrderType::Sell };
        let price = 100.0 + rng.gen_range(0..levels) as f64 * 0.5;
        let quantity = rng.gen_range(1..=10_000) as f64 / 100.0;
        let content = OrderContent::new(order_type, price, quantity, "bench", "Ethereum");
        board.push(Order::from_content(content, ids.next_id()));
    }

    board
}

// ============================================================================
// BENCHMARK: Summarize
// ============================================================================

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for &count in &[100usize, 1_000, 10_000] {
        let board = generate_board(count, 50, 42);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sell_side", count), &board, |b, board| {
            b.iter(|| summarize(black_box(board), OrderType::Sell))
        });
        group.bench_with_input(BenchmarkId::new("buy_side", count), &board, |b, board| {
            b.iter(|| summarize(black_box(board), OrderType::Buy))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Place / Cancel
// ============================================================================

fn bench_place_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_cancel");
    let board = generate_board(1_000, 50, 7);
    let ids = SequentialIdGenerator::new("extra");

    group.bench_function("place_into_1k", |b| {
        b.iter(|| {
            let content = OrderContent::new(OrderType::Buy, 99.5, 1.0, "bench", "Ethereum");
            place_order_with(black_box(&board), content, &ids)
        })
    });

    let middle = board[board.len() / 2].order_id.clone();
    group.bench_function("cancel_from_1k", |b| {
        b.iter(|| cancel_order(black_box(&board), black_box(&middle)))
    });

    group.finish();
}

criterion_group!(benches, bench_summarize, bench_place_cancel);
criterion_main!(benches);
