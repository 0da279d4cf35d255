use proconio::input;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
    }
    lines(numeric::primes_up_to(n))
}
