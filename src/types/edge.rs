//! The weighted edge triple.

use serde::Serialize;

use super::{NodeId, Weight};

/// One logical edge: `(source, target, weight)`.
///
/// Ordering is by source, then target, then weight, which is the order the
/// report rendering lists edges in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    /// Origin of the edge (either endpoint for undirected graphs).
    pub source: NodeId,
    /// Destination of the edge.
    pub target: NodeId,
    /// Integer weight; always 1 in unweighted graphs.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((source, target, weight): (NodeId, NodeId, Weight)) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}
