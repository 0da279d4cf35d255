/// Largest sum of a non-empty contiguous subarray, `None` for empty input.
pub fn max_subarray_sum(values: &[i64]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut best = first;
    let mut ending_here = first;
    for &v in rest {
        ending_here = v.max(ending_here + v);
        best = best.max(ending_here);
    }
    Some(best)
}
