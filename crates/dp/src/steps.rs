/// Rooms `0..n` in a row; `one[i]` is the cost of `i -> i + 1` and `two[i]`
/// the cost of `i -> i + 2`. Minimum cost from room 0 to room `n - 1`.
pub fn one_or_two_step_min_cost(one: &[i64], two: &[i64]) -> i64 {
    min_cost_table(one, two).last().copied().unwrap_or(0)
}

/// Like [`one_or_two_step_min_cost`], also returning the visited rooms.
pub fn one_or_two_step_route(one: &[i64], two: &[i64]) -> (i64, Vec<usize>) {
    let dp = min_cost_table(one, two);
    let n = dp.len();
    let mut route = vec![n - 1];
    let mut room = n - 1;
    while room > 0 {
        room = if dp[room - 1] + one[room - 1] == dp[room] {
            room - 1
        } else {
            room - 2
        };
        route.push(room);
    }
    route.reverse();
    (dp[n - 1], route)
}

fn min_cost_table(one: &[i64], two: &[i64]) -> Vec<i64> {
    let n = one.len() + 1;
    debug_assert_eq!(two.len(), n.saturating_sub(2));
    let mut dp = vec![0_i64; n];
    for i in 1..n {
        dp[i] = dp[i - 1] + one[i - 1];
        if i >= 2 {
            dp[i] = dp[i].min(dp[i - 2] + two[i - 2]);
        }
    }
    dp
}
