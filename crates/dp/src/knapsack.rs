/// 0/1 knapsack indexed by total value, for huge capacities and small values.
///
/// Items are `(weight, value)`.
pub fn knapsack_by_value(items: &[(u64, usize)], capacity: u64) -> usize {
    let total: usize = items.iter().map(|&(_, v)| v).sum();
    let mut min_weight = vec![u64::MAX; total + 1];
    min_weight[0] = 0;
    for &(w, v) in items {
        for value in (v..=total).rev() {
            let prev = min_weight[value - v];
            if prev != u64::MAX {
                min_weight[value] = min_weight[value].min(prev.saturating_add(w));
            }
        }
    }
    (0..=total)
        .rev()
        .find(|&value| min_weight[value] <= capacity)
        .unwrap_or(0)
}

/// 0/1 knapsack indexed by weight. Items are `(weight, value)`.
pub fn knapsack_by_weight(items: &[(usize, u64)], capacity: usize) -> u64 {
    let mut best = vec![0_u64; capacity + 1];
    for &(w, v) in items {
        if w > capacity {
            continue;
        }
        for cap in (w..=capacity).rev() {
            best[cap] = best[cap].max(best[cap - w] + v);
        }
    }
    best[capacity]
}
