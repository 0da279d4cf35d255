//! For each query `X`, how many elements are smaller than `X`.

use proconio::input;
use proconio::source::once::OnceSource;
use search::lower_bound;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        mut values: [i64; n],
        q: usize,
        queries: [i64; q],
    }

    values.sort_unstable();
    lines(queries.iter().map(|x| lower_bound(&values, x)))
}
