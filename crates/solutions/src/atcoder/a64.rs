//! Shortest distances from vertex 1 on a weighted undirected graph.

use graph::{DirectedGraph, dijkstra_with_parents};
use proconio::input;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        m: usize,
        edges: [(u32, u32, u64); m],
    }

    let edges: Vec<(u32, u32, u64)> = edges.into_iter().map(|(a, b, c)| (a - 1, b - 1, c)).collect();
    let graph = DirectedGraph::from_undirected_edges(n, &edges);
    let paths = dijkstra_with_parents(&graph, 0);
    lines((0..n).map(|v| paths.distance(v).map_or(-1, |d| d as i64)))
}
