//! For every `1..=N`, subtract the digit sum K times.

use proconio::input;
use proconio::source::once::OnceSource;
use search::Doubling;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        k: u64,
    }

    let next: Vec<usize> = (0..=n)
        .map(|i| i - numeric::digit_sum(i as u64) as usize)
        .collect();
    let doubling = Doubling::new(next, k);
    lines((1..=n).map(|i| doubling.jump(i, k)))
}
