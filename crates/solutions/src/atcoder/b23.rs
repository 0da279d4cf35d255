//! Exact shortest closed tour through at most 15 cities.

use proconio::input;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        cities: [(f64, f64); n],
    }

    let dist: Vec<Vec<f64>> = cities
        .iter()
        .map(|&(ax, ay)| cities.iter().map(|&(bx, by)| (ax - bx).hypot(ay - by)).collect())
        .collect();
    let best = dp::tsp_bitdp(&dist).unwrap_or(0.0);
    format!("{best:.12}")
}
