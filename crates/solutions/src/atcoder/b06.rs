//! Lottery: over matches `L..=R`, are there more wins (1) than losses (0)?

use proconio::input;
use proconio::marker::Usize1;
use proconio::source::once::OnceSource;
use range_query::PrefixSum;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        results: [i64; n],
        q: usize,
        queries: [(Usize1, usize); q],
    }

    let wins = PrefixSum::new(&results);
    lines(queries.into_iter().map(|(l, r)| {
        let won = wins.sum(l..r);
        let lost = (r - l) as i64 - won;
        match won.cmp(&lost) {
            std::cmp::Ordering::Greater => "win",
            std::cmp::Ordering::Less => "lose",
            std::cmp::Ordering::Equal => "draw",
        }
    }))
}
