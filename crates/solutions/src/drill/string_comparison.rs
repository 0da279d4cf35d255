//! Number of pairs of equal strings, compared by their double hash.

use std::collections::HashMap;

use proconio::input;
use proconio::marker::Bytes;
use proconio::source::once::OnceSource;
use strings::DoubleHash;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        words: [Bytes; n],
    }

    let mut seen: HashMap<(usize, (u64, u64)), u64> = HashMap::new();
    let mut pairs = 0_u64;
    for word in &words {
        let key = (word.len(), DoubleHash::new(word).hash(0..word.len()));
        let count = seen.entry(key).or_default();
        pairs += *count;
        *count += 1;
    }
    pairs.to_string()
}
