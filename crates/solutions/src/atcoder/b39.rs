//! One job per day for D days; job i opens on day `X_i` and pays `Y_i`.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        days: usize,
        jobs: [(usize, u64); n],
    }
    greedy::max_daily_reward(days, &jobs).to_string()
}
