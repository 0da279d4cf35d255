/// Number of non-empty contiguous windows whose sum is at most `k`.
///
/// Two pointers; relies on all values being non-negative.
pub fn count_windows_at_most(values: &[u64], k: u64) -> u64 {
    let mut count = 0_u64;
    let mut right = 0;
    let mut sum = 0_u64;
    for left in 0..values.len() {
        if right < left {
            right = left;
            sum = 0;
        }
        while right < values.len() && sum + values[right] <= k {
            sum += values[right];
            right += 1;
        }
        count += (right - left) as u64;
        if right > left {
            sum -= values[left];
        }
    }
    count
}
