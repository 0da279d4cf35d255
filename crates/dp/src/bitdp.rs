/// Shortest closed tour through every vertex, starting and ending at 0.
///
/// `dist` is a dense `n x n` matrix. `None` for an empty matrix or when no
/// finite tour exists. `O(2^n · n^2)`.
pub fn tsp_bitdp(dist: &[Vec<f64>]) -> Option<f64> {
    let n = dist.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0.0);
    }

    let full = 1_usize << n;
    let mut dp = vec![vec![f64::INFINITY; n]; full];
    dp[1][0] = 0.0;
    for mask in 1..full {
        if mask & 1 == 0 {
            continue;
        }
        for v in 0..n {
            let here = dp[mask][v];
            if !here.is_finite() {
                continue;
            }
            for u in 0..n {
                if mask >> u & 1 == 1 {
                    continue;
                }
                let next = mask | (1 << u);
                let cand = here + dist[v][u];
                if cand < dp[next][u] {
                    dp[next][u] = cand;
                }
            }
        }
    }

    let best = (1..n)
        .map(|v| dp[full - 1][v] + dist[v][0])
        .fold(f64::INFINITY, f64::min);
    best.is_finite().then_some(best)
}
