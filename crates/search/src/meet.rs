/// Whether some subset of `values` sums to exactly `target`.
///
/// Splits the input in half and enumerates both sides, `O(2^(n/2) · n)`.
pub fn subset_sum_meet_in_middle(values: &[u64], target: u64) -> bool {
    let (left, right) = values.split_at(values.len() / 2);
    let left_sums = all_subset_sums(left);
    let mut right_sums = all_subset_sums(right);
    right_sums.sort_unstable();

    left_sums
        .iter()
        .filter_map(|&s| target.checked_sub(s))
        .any(|rest| right_sums.binary_search(&rest).is_ok())
}

fn all_subset_sums(values: &[u64]) -> Vec<u64> {
    let mut sums = Vec::with_capacity(1 << values.len());
    sums.push(0);
    for &v in values {
        for i in 0..sums.len() {
            sums.push(sums[i] + v);
        }
    }
    sums
}
