//! `P X N Q`, then S, then Q ranges `L R`: print `H(S[L..=R]) mod P` with
//! base X.

use proconio::input;
use proconio::marker::{Bytes, Usize1};
use proconio::source::once::OnceSource;
use strings::PolyHash;

use super::letter_value;
use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        p: u64,
        x: u64,
        _n: usize,
        q: usize,
        s: Bytes,
        queries: [(Usize1, usize); q],
    }

    let hash = PolyHash::new(s.iter().map(|&c| letter_value(c)), x, p);
    lines(queries.into_iter().map(|(l, r)| hash.hash(l..r)))
}
