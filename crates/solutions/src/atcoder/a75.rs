//! Deadline scheduling: most tasks finished by their deadlines.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        tasks: [(u64, u64); n],
    }
    greedy::max_tasks_by_deadline(&tasks).to_string()
}
