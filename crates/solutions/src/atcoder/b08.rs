//! Count points inside axis-aligned rectangles on a `1..=1500` grid.

use proconio::input;
use proconio::source::once::OnceSource;
use range_query::PrefixSum2d;

use crate::lines;

const MAX_COORD: usize = 1500;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        points: [(usize, usize); n],
        q: usize,
        rects: [(usize, usize, usize, usize); q],
    }

    let mut grid = vec![vec![0_i64; MAX_COORD + 1]; MAX_COORD + 1];
    for (x, y) in points {
        grid[x][y] += 1;
    }
    let counts = PrefixSum2d::new(&grid);
    lines(rects.into_iter().map(|(a, b, c, d)| counts.sum(a..c + 1, b..d + 1)))
}
