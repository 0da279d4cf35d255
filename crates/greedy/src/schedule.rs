use std::collections::BinaryHeap;

/// Maximum number of tasks finishable on time when run back to back from
/// time 0. Tasks are `(duration, deadline)`.
pub fn max_tasks_by_deadline(tasks: &[(u64, u64)]) -> usize {
    let mut order: Vec<(u64, u64)> = tasks.to_vec();
    order.sort_unstable_by_key(|&(_, deadline)| deadline);

    let mut taken = BinaryHeap::new();
    let mut elapsed = 0_u64;
    for (duration, deadline) in order {
        taken.push(duration);
        elapsed += duration;
        if elapsed > deadline {
            if let Some(longest) = taken.pop() {
                elapsed -= longest;
            }
        }
    }
    taken.len()
}

/// Best total reward doing at most one job per day over days `1..=days`.
///
/// Jobs are `(available_from, reward)` with 1-based days.
pub fn max_daily_reward(days: usize, jobs: &[(usize, u64)]) -> u64 {
    let mut order: Vec<(usize, u64)> = jobs.to_vec();
    order.sort_unstable_by_key(|&(from, _)| from);

    let mut open = BinaryHeap::new();
    let mut next = 0;
    let mut total = 0;
    for day in 1..=days {
        while next < order.len() && order[next].0 <= day {
            open.push(order[next].1);
            next += 1;
        }
        if let Some(reward) = open.pop() {
            total += reward;
        }
    }
    total
}
