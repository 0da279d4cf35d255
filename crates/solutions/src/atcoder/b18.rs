//! Subset sum with the chosen cards printed (1-based), or `-1`.

use proconio::input;
use proconio::source::once::OnceSource;

use crate::join;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        s: usize,
        values: [usize; n],
    }

    match dp::subset_sum(&values, s) {
        Some(chosen) => format!("{}\n{}", chosen.len(), join(chosen.iter().map(|&i| i + 1), " ")),
        None => "-1".to_owned(),
    }
}
