//! Card set: `1 x` add, `2 x` remove, `3 x` print the smallest card `>= x`.

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

    let mut set = NearestSet::new();
    let mut out = Vec::new();
    for (kind, x) in queries {
        match kind {
            1 => {
                set.insert(x);
            }
            2 => {
                set.remove(x);
            }
            _ => out.push(set.min_at_least(x).unwrap_or(-1)),
        }
    }
    lines(out)
}
