mod bfs;
mod dijkstra;
pub mod graph;
pub mod tsp;
mod union_find;

pub use bfs::{bfs_distances, shortest_path};
pub use dijkstra::{ShortestPaths, dijkstra, dijkstra_with_parents};
pub use graph::DirectedGraph;
pub use graph::Edge;
pub use union_find::UnionFind;

pub const INF: u64 = u64::MAX / 4;
