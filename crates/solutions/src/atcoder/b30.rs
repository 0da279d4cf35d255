//! Monotone lattice paths across an H x W grid, modulo 1e9+7.

use numeric::Binomial;
use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        h: usize,
        w: usize,
    }
    let binomial = Binomial::<{ numeric::MOD_1E9_7 }>::new(h + w);
    binomial.choose(h + w - 2, w - 1).to_string()
}
