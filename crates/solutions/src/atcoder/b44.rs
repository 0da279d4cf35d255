//! Grid queries: `1 x y` swaps rows x and y, `2 x y` prints a cell.
//!
//! Swaps only touch a row index table.

use proconio::input;
use proconio::marker::Usize1;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        grid: [[u32; n]; n],
        q: usize,
        queries: [(u8, Usize1, Usize1); q],
    }

    let mut row_of: Vec<usize> = (0..n).collect();
    let mut out = Vec::new();
    for (kind, x, y) in queries {
        if kind == 1 {
            row_of.swap(x, y);
        } else {
            out.push(grid[row_of[x]][y]);
        }
    }
    lines(out)
}
