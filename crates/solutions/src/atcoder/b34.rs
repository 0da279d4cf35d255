//! N piles, each move removes X or Y stones from one pile.
//!
//! The Grundy sequence of a two-move subtraction game `{X, Y}` with `X < Y`
//! repeats with period `X + Y`.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        x: usize,
        y: usize,
        piles: [u64; n],
    }

    let period = x + y;
    let grundy = numeric::grundy_numbers(period, &[x, y]);
    let xor = numeric::nim_sum(piles.iter().map(|&a| u64::from(grundy[(a % period as u64) as usize])));
    let winner = if xor != 0 { "First" } else { "Second" };
    winner.to_owned()
}
