//! Longest length L such that two different positions of S start equal
//! substrings of length L.

use proconio::input;
use proconio::marker::Bytes;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        _n: usize,
        s: Bytes,
    }
    strings::longest_repeated_substring(&s).to_string()
}
