//! Heuristic TSP: print a closed tour starting and ending at city 1.

use graph::tsp;
use proconio::input;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        points: [(i64, i64); n],
    }

    let mut tour = tsp::nearest_neighbor_tour(&points);
    let greedy_len = tsp::tour_length(&points, &tour);
    let moves = tsp::two_opt(&points, &mut tour);
    log::debug!(
        "a46: nearest neighbour {greedy_len:.1}, 2-opt {:.1} after {moves} moves",
        tsp::tour_length(&points, &tour)
    );

    if let Some(&first) = tour.first() {
        tour.push(first);
    }
    lines(tour.iter().map(|&city| city + 1))
}
