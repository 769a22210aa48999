//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, NodeId, Weight, DEFAULT_TITLE};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nodes and edges are replayed through [`Graph::add_node`] and
/// [`Graph::add_edge`] on [`GraphBuilder::build`], so every store invariant
/// applies and the first failing edge is reported.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    title: String,
    directed: bool,
    weighted: bool,
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            directed: false,
            weighted: false,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Make edges one-way.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Keep caller-supplied edge weights.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Add a node, edges or not.
    pub fn node(mut self, node: impl Into<NodeId>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Add several nodes.
    pub fn nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Add an edge with weight 1.
    pub fn link(self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        self.edge(source, target, 1)
    }

    /// Add a weighted edge.
    pub fn edge(
        mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: Weight,
    ) -> Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add several weighted edges.
    pub fn edges<I, E>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::with_title(self.title, self.directed, self.weighted);
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
