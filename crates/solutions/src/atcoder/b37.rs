//! Sum of the digit sums of `1..=N`, N up to 1e15.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: u64,
    }
    numeric::digit_sum_total(n).to_string()
}
