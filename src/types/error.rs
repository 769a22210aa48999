//! Error types for the graphkit library.

use thiserror::Error;

use super::NodeId;

/// Coarse classification of [`GraphError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced node does not exist.
    NotFound,
    /// A self-loop was attempted, or the named endpoints share no edge.
    InvalidEdge,
    /// An algorithm precondition on the graph as a whole was violated.
    InvalidGraph,
    /// A negative-weight cycle makes shortest paths undefined.
    NegativeCycle,
    /// A generator parameter is out of range.
    InvalidArgument,
}

/// All errors that can occur in the graphkit library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found in the named graph.
    #[error("'{node}' not found in '{graph}'")]
    NodeNotFound { node: NodeId, graph: String },

    /// Self-loops are never stored.
    #[error("Self-loop not allowed on node '{0}'")]
    SelfLoop(NodeId),

    /// No edge between the two endpoints.
    #[error("No edge found from '{from}' to '{to}'")]
    EdgeNotFound { from: NodeId, to: NodeId },

    /// The graph does not satisfy an algorithm precondition.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// The graph has more than one connected component.
    #[error("Graph is disconnected: {components} components")]
    Disconnected { components: usize },

    /// A reachable negative-weight cycle was found.
    #[error("Negative cycle detected")]
    NegativeCycle,

    /// Out-of-range argument to a generator.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    /// The coarse kind of this error. `Disconnected` reports as `InvalidGraph`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeNotFound { .. } => ErrorKind::NotFound,
            Self::SelfLoop(_) | Self::EdgeNotFound { .. } => ErrorKind::InvalidEdge,
            Self::InvalidGraph(_) | Self::Disconnected { .. } => ErrorKind::InvalidGraph,
            Self::NegativeCycle => ErrorKind::NegativeCycle,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenience result type for graphkit operations.
pub type GraphResult<T> = Result<T, GraphError>;
