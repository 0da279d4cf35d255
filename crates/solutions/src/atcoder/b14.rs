//! Subset sum with N up to 30 by meet in the middle.

use proconio::input;
use proconio::source::once::OnceSource;

use crate::yes_no;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        k: u64,
        values: [u64; n],
    }
    yes_no(search::subset_sum_meet_in_middle(&values, k)).to_string()
}
