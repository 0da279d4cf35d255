/// First index whose element is not less than `x`.
pub fn lower_bound<T: Ord>(sorted: &[T], x: &T) -> usize {
    sorted.partition_point(|v| v < x)
}

/// First index whose element is greater than `x`.
pub fn upper_bound<T: Ord>(sorted: &[T], x: &T) -> usize {
    sorted.partition_point(|v| v <= x)
}

/// Boundary search over integers.
///
/// `pred(ok)` must hold and `pred(ng)` must not; `pred` is assumed monotone
/// between them. Returns the value next to `ng` on the `ok` side. Works in
/// either direction.
pub fn bisect(mut ok: i64, mut ng: i64, mut pred: impl FnMut(i64) -> bool) -> i64 {
    while ok.abs_diff(ng) > 1 {
        let mid = ok + (ng - ok) / 2;
        if pred(mid) {
            ok = mid;
        } else {
            ng = mid;
        }
    }
    ok
}
