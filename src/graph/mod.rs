//! In-memory graph store — the core data structure and its read views.

pub mod builder;
pub mod generators;
pub mod render;
pub mod store;

pub use builder::GraphBuilder;
pub use generators::{c_graph, k_bipartite_graph, k_graph};
pub use render::GraphView;
pub use store::{Graph, Neighbors};
