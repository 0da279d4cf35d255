//! River crossing: ways to reach `W` from `0` over footholds, jumping a
//! distance in `[L, R]` each time, modulo 1e9+7.

use numeric::ModInt1000000007 as Mint;
use proconio::input;
use proconio::source::once::OnceSource;
use range_query::FenwickTree;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        w: u64,
        l: u64,
        r: u64,
        footholds: [u64; n],
    }

    let mut positions = Vec::with_capacity(n + 2);
    positions.push(0);
    positions.extend(footholds);
    positions.push(w);
    positions.sort_unstable();

    // ways[i] lives in the tree at index i
    let mut ways = FenwickTree::<Mint>::new(positions.len());
    ways.add(0, Mint::new(1));
    for (i, &here) in positions.iter().enumerate().skip(1) {
        let lo = positions.partition_point(|&p| p + r < here);
        let hi = positions.partition_point(|&p| p + l <= here).min(i);
        if lo < hi {
            let reached = ways.sum(lo..hi);
            ways.add(i, reached);
        }
    }
    let last = positions.len() - 1;
    ways.sum(last..last + 1).to_string()
}
