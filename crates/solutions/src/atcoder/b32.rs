//! Subtraction game with N stones and K allowed removals.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        k: usize,
        moves: [usize; k],
    }
    let win = numeric::winning_positions(n, &moves);
    let winner = if win[n] { "First" } else { "Second" };
    winner.to_owned()
}
