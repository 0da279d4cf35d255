use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::INF;
use crate::graph::DirectedGraph;

pub fn dijkstra(graph: &DirectedGraph, source: usize) -> Vec<u64> {
    dijkstra_with_parents(graph, source).dist
}

#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub source: usize,
    pub dist: Vec<u64>,
    pub parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn distance(&self, v: usize) -> Option<u64> {
        (self.dist[v] < INF).then_some(self.dist[v])
    }

    /// Vertices from the source to `target`, both inclusive.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut v = target;
        while let Some(p) = self.parent[v] {
            path.push(p);
            v = p;
        }
        path.reverse();
        Some(path)
    }
}

pub fn dijkstra_with_parents(graph: &DirectedGraph, source: usize) -> ShortestPaths {
    let n = graph.vertex_count();
    let mut dist = vec![INF; n];
    let mut parent = vec![None; n];
    if source >= n {
        return ShortestPaths {
            source,
            dist,
            parent,
        };
    }

    let mut heap = BinaryHeap::new();
    dist[source] = 0;
    heap.push(Reverse((0_u64, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d != dist[u] {
            continue;
        }

        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            let cand = d.saturating_add(edge.weight).min(INF);
            if cand < dist[v] {
                dist[v] = cand;
                parent[v] = Some(u);
                heap.push(Reverse((cand, v)));
            }
        }
    }

    ShortestPaths {
        source,
        dist,
        parent,
    }
}
