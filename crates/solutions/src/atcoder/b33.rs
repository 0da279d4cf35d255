//! Pieces on an H x W board each move up or left; a piece at `(a, b)` is a
//! pair of independent Nim heaps of sizes `a - 1` and `b - 1`.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        _h: u64,
        _w: u64,
        pieces: [(u64, u64); n],
    }
    let xor = numeric::nim_sum(pieces.into_iter().flat_map(|(a, b)| [a - 1, b - 1]));
    let winner = if xor != 0 { "First" } else { "Second" };
    winner.to_owned()
}
