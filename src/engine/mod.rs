//! Algorithm layer: traversal, structural analysis, spanning trees, shortest paths.
//!
//! Every algorithm takes its input graph by shared reference and never
//! mutates it; result graphs are freshly allocated.

pub mod analysis;
pub mod mst;
pub mod pathfinding;
pub mod traversal;

pub use analysis::{eulerian_circuit, get_components, has_cycles, is_eulerian};
pub use mst::{kruskal, prim};
pub use pathfinding::{bellman_ford, dijkstra, floyd_warshall, DistanceMatrix, ShortestPaths};
pub use traversal::{
    bfs_contains, bfs_order, bfs_order_with, dfs_contains, dfs_order, dfs_order_with,
};
