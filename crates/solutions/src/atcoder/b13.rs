//! Number of contiguous ranges whose total price is at most K.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        k: u64,
        prices: [u64; n],
    }
    search::count_windows_at_most(&prices, k).to_string()
}
