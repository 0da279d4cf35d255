/// Picks items whose values sum to exactly `target`.
///
/// Returns the chosen indices in increasing order, or `None` when no subset
/// works. `O(n · target)` time and memory.
pub fn subset_sum(values: &[usize], target: usize) -> Option<Vec<usize>> {
    let n = values.len();
    let mut reachable = vec![vec![false; target + 1]; n + 1];
    reachable[0][0] = true;
    for (i, &v) in values.iter().enumerate() {
        for s in 0..=target {
            reachable[i + 1][s] = reachable[i][s] || (s >= v && reachable[i][s - v]);
        }
    }
    if !reachable[n][target] {
        return None;
    }

    let mut chosen = Vec::new();
    let mut s = target;
    for i in (0..n).rev() {
        if !reachable[i][s] {
            chosen.push(i);
            s -= values[i];
        }
    }
    chosen.reverse();
    Some(chosen)
}
