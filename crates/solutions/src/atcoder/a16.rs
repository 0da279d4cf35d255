//! Dungeon: room `i - 1 -> i` costs `A_i`, room `i - 2 -> i` costs `B_i`.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        one: [i64; n - 1],
        two: [i64; n.saturating_sub(2)],
    }
    dp::one_or_two_step_min_cost(&one, &two).to_string()
}
