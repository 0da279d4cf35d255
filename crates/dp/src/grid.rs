/// Right/down lattice paths avoiding `true` cells.
pub fn unique_paths_with_obstacles(blocked: &[Vec<bool>]) -> u64 {
    let Some(width) = blocked.first().map(Vec::len) else {
        return 0;
    };
    let mut ways = vec![0_u64; width];
    if width > 0 {
        ways[0] = 1;
    }
    for row in blocked {
        for (j, &b) in row.iter().enumerate() {
            if b {
                ways[j] = 0;
            } else if j > 0 {
                ways[j] = ways[j].saturating_add(ways[j - 1]);
            }
        }
    }
    ways.last().copied().unwrap_or(0)
}

/// Minimum sum along a right/down path from the top-left to the bottom-right.
pub fn min_path_sum(grid: &[Vec<u64>]) -> Option<u64> {
    let width = grid.first()?.len();
    if width == 0 {
        return None;
    }
    let mut best = vec![u64::MAX; width];
    best[0] = 0;
    for row in grid {
        for (j, &cost) in row.iter().enumerate() {
            let from_left = if j > 0 { best[j - 1] } else { u64::MAX };
            best[j] = best[j].min(from_left).saturating_add(cost);
        }
    }
    best.last().copied()
}
