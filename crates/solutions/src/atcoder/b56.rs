//! Palindrome queries on substrings `S[L..=R]`.

use proconio::input;
use proconio::marker::{Bytes, Usize1};
use proconio::source::once::OnceSource;
use strings::{Manacher, PalindromeIndex};

use crate::{lines, yes_no};

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        _n: usize,
        q: usize,
        s: Bytes,
        queries: [(Usize1, usize); q],
    }
    let index = Manacher::new(&s);
    lines(queries.into_iter().map(|(l, r)| yes_no(index.is_palindrome(l..r))))
}
