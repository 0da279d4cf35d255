//! Knapsack with capacity up to 1e9 and small values.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        capacity: u64,
        items: [(u64, usize); n],
    }
    dp::knapsack_by_value(&items, capacity).to_string()
}
