//! Matching bracket positions, in order of the closing bracket.

use proconio::input;
use proconio::marker::Bytes;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        s: Bytes,
    }

    let Some(pairs) = strings::bracket_pairs(&s) else {
        log::warn!("b51: unbalanced bracket sequence");
        return String::new();
    };
    lines(pairs.into_iter().map(|(open, close)| format!("{} {}", open + 1, close + 1)))
}
