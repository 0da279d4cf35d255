/// Whether index `len - 1` is reachable when `steps[i]` is the longest jump
/// allowed from `i`.
pub fn can_reach_end(steps: &[usize]) -> bool {
    let mut reach = 0;
    for (i, &step) in steps.iter().enumerate() {
        if i > reach {
            return false;
        }
        reach = reach.max(i + step);
    }
    true
}

/// Fewest jumps to reach the last index, `None` when it is unreachable.
pub fn min_jumps(steps: &[usize]) -> Option<usize> {
    let last = steps.len().checked_sub(1)?;
    let mut jumps = 0;
    let mut current_end = 0;
    let mut farthest = 0;
    for (i, &step) in steps.iter().enumerate().take(last) {
        if i > farthest {
            return None;
        }
        farthest = farthest.max(i + step);
        if i == current_end {
            jumps += 1;
            current_end = farthest;
            if current_end >= last {
                break;
            }
        }
    }
    (current_end >= last).then_some(jumps)
}
