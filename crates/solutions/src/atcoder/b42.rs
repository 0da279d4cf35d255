//! Choose cards to maximize `|Σ front| + |Σ back|`.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        cards: [(i64, i64); n],
    }
    greedy::max_abs_pair_sum(&cards).to_string()
}
