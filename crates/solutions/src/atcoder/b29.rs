//! `a^b mod 1e9+7` with `b` up to 1e18.

use numeric::MOD_1E9_7;
use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        a: u64,
        b: u64,
    }
    numeric::mod_pow(a, b, MOD_1E9_7).to_string()
}
