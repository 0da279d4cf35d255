//! Flipping two bulbs at a time keeps the parity of the lit count.

use proconio::input;
use proconio::marker::Bytes;
use proconio::source::once::OnceSource;

use crate::yes_no;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        _n: usize,
        k: usize,
        bulbs: Bytes,
    }
    let lit = bulbs.iter().filter(|&&b| b == b'1').count();
    yes_no(lit % 2 == k % 2).to_owned()
}
