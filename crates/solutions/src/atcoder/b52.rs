//! White balls (`.`) reachable from ball X through white neighbours turn
//! blue (`@`).

use graph::{DirectedGraph, bfs_distances};
use proconio::input;
use proconio::marker::{Bytes, Usize1};
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        start: Usize1,
        mut balls: Bytes,
    }

    let edges: Vec<(u32, u32, u64)> = (1..n)
        .filter(|&i| balls[i - 1] == b'.' && balls[i] == b'.')
        .map(|i| ((i - 1) as u32, i as u32, 1))
        .collect();
    let line = DirectedGraph::from_undirected_edges(n, &edges);
    for (ball, reached) in balls.iter_mut().zip(bfs_distances(&line, start)) {
        if reached.is_some() {
            *ball = b'@';
        }
    }
    String::from_utf8_lossy(&balls).into_owned()
}
