/// Rain water held between bars of the given heights.
pub fn trapped_water(heights: &[u64]) -> u64 {
    if heights.is_empty() {
        return 0;
    }
    let (mut left, mut right) = (0, heights.len() - 1);
    let (mut left_max, mut right_max) = (0, 0);
    let mut water = 0;
    while left < right {
        if heights[left] < heights[right] {
            left_max = left_max.max(heights[left]);
            water += left_max - heights[left];
            left += 1;
        } else {
            right_max = right_max.max(heights[right]);
            water += right_max - heights[right];
            right -= 1;
        }
    }
    water
}
