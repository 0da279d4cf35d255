//! `1 x` puts card x on the desk, `2 x` prints the smallest `|card - x|`
//! (`-1` while the desk is empty).

use proconio::input;
use proconio::source::once::OnceSource;
use search::NearestSet;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        q: usize,
        queries: [(u8, i64); q],
    }

    let mut desk = NearestSet::new();
    let mut out = Vec::new();
    for (kind, x) in queries {
        if kind == 1 {
            desk.insert(x);
        } else {
            out.push(desk.closest_distance(x).map_or(-1, |d| d as i64));
        }
    }
    lines(out)
}
