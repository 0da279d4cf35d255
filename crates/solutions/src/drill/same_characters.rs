//! `N Q`, then S, then Q updates `i c` setting `S_i = c`: after each update
//! print how many consecutive positions starting at `i` hold `c`.

use proconio::input;
use proconio::marker::{Bytes, Usize1};
use proconio::source::once::OnceSource;
use range_query::{RunSummary, Runs, SegmentTree};

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        q: usize,
        s: Bytes,
        updates: [(Usize1, char); q],
    }

    let mut runs = SegmentTree::<Runs>::from(s.iter().map(|&c| RunSummary::single(c)).collect::<Vec<_>>());
    let mut out = Vec::with_capacity(q);
    for (i, c) in updates {
        runs.set(i, RunSummary::single(c as u8));
        out.push(runs.fold(i..n).prefix);
    }
    lines(out)
}
