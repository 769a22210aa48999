//! All data types for the graphkit library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod node;

pub use distance::{Distance, PathLength};
pub use edge::Edge;
pub use error::{ErrorKind, GraphError, GraphResult};
pub use node::NodeId;

/// Integer edge weight.
pub type Weight = i64;

/// Title given to graphs created without one.
pub const DEFAULT_TITLE: &str = "Graph";

/// Suffix appended to the title of a minimum spanning tree.
pub const MST_SUFFIX: &str = "_(mst)";

/// Suffix appended to the title of a Dijkstra shortest-path tree.
pub const DIJKSTRA_SPT_SUFFIX: &str = "_(dijkstra_spt)";

/// Suffix appended to the title of a Bellman–Ford shortest-path tree.
pub const BELLMAN_FORD_SPT_SUFFIX: &str = "_(bf_spt)";

/// Extension used for report file names.
pub const REPORT_EXTENSION: &str = "txt";
