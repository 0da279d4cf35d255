use std::collections::VecDeque;

use crate::graph::DirectedGraph;

/// Edge counts from `source`, ignoring weights.
pub fn bfs_distances(graph: &DirectedGraph, source: usize) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let mut dist = vec![None; n];
    if source >= n {
        return dist;
    }

    let mut queue = VecDeque::with_capacity(n);
    dist[source] = Some(0);
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        let next = dist[u].map_or(0, |d| d + 1);
        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            if dist[v].is_none() {
                dist[v] = Some(next);
                queue.push_back(v);
            }
        }
    }
    dist
}

/// A path with the fewest edges from `from` to `to`, both inclusive.
pub fn shortest_path(graph: &DirectedGraph, from: usize, to: usize) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    if from >= n || to >= n {
        return None;
    }

    let mut parent = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    parent[from] = from;
    queue.push_back(from);
    while let Some(u) = queue.pop_front() {
        if u == to {
            break;
        }
        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            if parent[v] == usize::MAX {
                parent[v] = u;
                queue.push_back(v);
            }
        }
    }

    if parent[to] == usize::MAX {
        return None;
    }
    let mut path = vec![to];
    let mut v = to;
    while v != from {
        v = parent[v];
        path.push(v);
    }
    path.reverse();
    Some(path)
}
