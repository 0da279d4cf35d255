//! Pairs `j < i` with `A_j = A_i`.

use std::collections::HashMap;

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        values: [u64; n],
    }

    let mut seen: HashMap<u64, u64> = HashMap::new();
    let mut pairs = 0_u64;
    for v in values {
        let count = seen.entry(v).or_default();
        pairs += *count;
        *count += 1;
    }
    pairs.to_string()
}
