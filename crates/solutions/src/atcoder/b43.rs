//! Quiz: question i is answered wrong only by student `A_i`.

use proconio::input;
use proconio::marker::Usize1;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        m: usize,
        wrong: [Usize1; m],
    }

    let mut misses = vec![0_usize; n];
    for student in wrong {
        misses[student] += 1;
    }
    lines(misses.into_iter().map(|miss| m - miss))
}
