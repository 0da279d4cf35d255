//! `P X N Q`, then S, then Q updates `i c` setting `S_i = c`: print the hash
//! of the whole text after every update.
//!
//! Position `i` (1-based) contributes `T_i · X^(N-i)`, so an update adds
//! `(new - old) · X^(N-i)`.

use proconio::input;
use proconio::marker::Usize1;
use proconio::source::once::OnceSource;
use strings::PolyHash;

use super::letter_value;
use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        p: u64,
        x: u64,
        n: usize,
        q: usize,
        s: String,
        updates: [(Usize1, char); q],
    }

    let mut text = s.into_bytes();
    let initial = PolyHash::new(text.iter().map(|&c| letter_value(c)), x, p);
    let mut hash = initial.hash(0..n);

    let mut out = Vec::with_capacity(q);
    for (i, c) in updates {
        let new = letter_value(c as u8);
        let old = letter_value(text[i]);
        let delta = (new % p + p - old % p) % p;
        let weight = initial.power(n - 1 - i);
        hash = ((hash as u128 + delta as u128 * weight as u128) % p as u128) as u64;
        text[i] = c as u8;
        out.push(hash);
    }
    lines(out)
}
