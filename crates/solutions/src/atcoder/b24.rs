//! Longest chain of boxes, each strictly smaller than the next in both sides.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        mut boxes: [(u32, u32); n],
    }

    // Equal widths sort by descending height so they cannot chain.
    boxes.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
    let heights: Vec<u32> = boxes.iter().map(|&(_, h)| h).collect();
    dp::lis_length(&heights, true).to_string()
}
