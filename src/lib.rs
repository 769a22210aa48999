//! graphkit — a general-purpose graph store with classical graph algorithms.
//!
//! Stores directed or undirected, weighted or unweighted simple graphs keyed by
//! canonical node identifiers, and answers structural queries (degree,
//! reachability, components, cycles), minimum spanning trees (Kruskal, Prim)
//! and shortest paths (Dijkstra, Bellman–Ford, Floyd–Warshall).
//!
//! ```
//! use graphkit::{dijkstra, Distance, Graph};
//!
//! let mut graph = Graph::new(false, true);
//! graph.add_edge("A", "B", 3).unwrap();
//! graph.add_edge("B", "C", 1).unwrap();
//!
//! let paths = dijkstra(&graph, "A").unwrap();
//! assert_eq!(paths.distance("C"), Distance::Finite(4));
//! ```

pub mod engine;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    bellman_ford, bfs_contains, bfs_order, bfs_order_with, dfs_contains, dfs_order,
    dfs_order_with, dijkstra, eulerian_circuit, floyd_warshall, get_components, has_cycles,
    is_eulerian, kruskal, prim, DistanceMatrix, ShortestPaths,
};
pub use graph::{c_graph, k_bipartite_graph, k_graph, Graph, GraphBuilder, GraphView};
pub use index::DisjointSet;
pub use types::{
    Distance, Edge, ErrorKind, GraphError, GraphResult, NodeId, PathLength, Weight,
    DEFAULT_TITLE,
};
