/// Largest axis-aligned rectangle under a histogram of unit-width bars.
///
/// Monotonic stack of bar indices with increasing heights.
pub fn largest_rectangle(heights: &[u64]) -> u64 {
    let mut stack: Vec<usize> = Vec::with_capacity(heights.len());
    let mut best = 0;
    for i in 0..=heights.len() {
        let h = heights.get(i).copied().unwrap_or(0);
        while let Some(&top) = stack.last() {
            if heights[top] < h {
                break;
            }
            stack.pop();
            let left = stack.last().map_or(0, |&l| l + 1);
            best = best.max(heights[top] * (i - left) as u64);
        }
        stack.push(i);
    }
    best
}

/// Area of the largest all-`true` rectangle in a grid.
pub fn maximal_rectangle(grid: &[Vec<bool>]) -> u64 {
    let width = grid.first().map_or(0, Vec::len);
    let mut heights = vec![0_u64; width];
    let mut best = 0;
    for row in grid {
        for (h, &cell) in heights.iter_mut().zip(row) {
            *h = if cell { *h + 1 } else { 0 };
        }
        best = best.max(largest_rectangle(&heights));
    }
    best
}
