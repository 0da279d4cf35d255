//! Shortest route from 1 to N; among shortest routes, the most trees.
//!
//! Each edge weighs `c * SCALE - d`, which orders by length first and by
//! tree count second as long as no route has `SCALE` or more trees.

use graph::{DirectedGraph, dijkstra};
use proconio::input;
use proconio::source::once::OnceSource;

const SCALE: u64 = 10_000;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        m: usize,
        edges: [(u32, u32, u64, u64); m],
    }

    let edges: Vec<(u32, u32, u64)> = edges
        .into_iter()
        .map(|(a, b, c, d)| (a - 1, b - 1, c * SCALE - d))
        .collect();
    let graph = DirectedGraph::from_undirected_edges(n, &edges);
    let weighted = dijkstra(&graph, 0)[n - 1];

    let length = weighted.div_ceil(SCALE);
    let trees = length * SCALE - weighted;
    format!("{length} {trees}")
}
