//! Core graph structure — node set plus weighted adjacency.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{Edge, GraphError, GraphResult, NodeId, Weight, DEFAULT_TITLE};

/// Neighbor mapping of one node: neighbor -> edge weight.
pub type Neighbors = BTreeMap<NodeId, Weight>;

/// A directed or undirected, weighted or unweighted simple graph.
///
/// The adjacency mapping is the single source of truth: the node set is its
/// key set. Storage is ordered, so every iteration (nodes, neighbors, edges)
/// runs in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Display label; not an identity key.
    title: String,
    /// Fixed at construction.
    directed: bool,
    /// Fixed at construction. Unweighted graphs store weight 1 everywhere.
    weighted: bool,
    /// Number of logical edges currently holding a negative weight.
    negative_weights: usize,
    /// node -> (neighbor -> weight). Undirected edges are stored both ways.
    adjacency: BTreeMap<NodeId, Neighbors>,
}

impl Graph {
    /// Create a new empty graph with the default title.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_title(DEFAULT_TITLE, directed, weighted)
    }

    /// Create a new empty graph with a title.
    pub fn with_title(title: impl Into<String>, directed: bool, weighted: bool) -> Self {
        Self {
            title: title.into(),
            directed,
            weighted,
            negative_weights: 0,
            adjacency: BTreeMap::new(),
        }
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the display title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether edges carry caller-supplied weights.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of logical edges with a negative weight.
    pub fn negative_weights(&self) -> usize {
        self.negative_weights
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of logical edges (undirected edges count once).
    pub fn num_edges(&self) -> usize {
        let stored: usize = self.adjacency.values().map(BTreeMap::len).sum();
        if self.directed {
            stored
        } else {
            stored / 2
        }
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.adjacency.keys()
    }

    /// Whether the node exists.
    pub fn has_node(&self, node: impl Into<NodeId>) -> bool {
        self.adjacency.contains_key(&node.into())
    }

    /// Whether an edge `source -> target` exists. Both nodes must exist.
    pub fn has_edge(
        &self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> GraphResult<bool> {
        let (source, target) = (source.into(), target.into());
        let neighbors = self.require(&source)?;
        self.require(&target)?;
        Ok(neighbors.contains_key(&target))
    }

    /// Out-neighbor count.
    pub fn degree(&self, node: impl Into<NodeId>) -> GraphResult<usize> {
        Ok(self.require(&node.into())?.len())
    }

    /// Alias of [`Graph::degree`].
    pub fn out_degree(&self, node: impl Into<NodeId>) -> GraphResult<usize> {
        self.degree(node)
    }

    /// Number of nodes with an edge into `node`.
    pub fn in_degree(&self, node: impl Into<NodeId>) -> GraphResult<usize> {
        let node = node.into();
        self.require(&node)?;
        Ok(self
            .adjacency
            .values()
            .filter(|neighbors| neighbors.contains_key(&node))
            .count())
    }

    /// The set of out-neighbors of `node`.
    pub fn neighbors(&self, node: impl Into<NodeId>) -> GraphResult<BTreeSet<NodeId>> {
        Ok(self.require(&node.into())?.keys().cloned().collect())
    }

    /// Out-neighbors of `node` with their weights, in ascending order.
    pub fn neighbors_with_weights(
        &self,
        node: impl Into<NodeId>,
    ) -> GraphResult<impl Iterator<Item = (&NodeId, Weight)> + '_> {
        Ok(self.require(&node.into())?.iter().map(|(n, w)| (n, *w)))
    }

    /// Weight of the edge `source -> target`; always 1 in an unweighted graph.
    pub fn weight(
        &self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> GraphResult<Weight> {
        let (source, target) = (source.into(), target.into());
        let neighbors = self.require(&source)?;
        self.require(&target)?;
        let weight = neighbors
            .get(&target)
            .copied()
            .ok_or(GraphError::EdgeNotFound {
                from: source,
                to: target,
            })?;
        Ok(if self.weighted { weight } else { 1 })
    }

    /// Add a node. Returns false if it was already present.
    pub fn add_node(&mut self, node: impl Into<NodeId>) -> bool {
        let node = node.into();
        if self.adjacency.contains_key(&node) {
            return false;
        }
        log::trace!("'{}': add node {}", self.title, node);
        self.adjacency.insert(node, Neighbors::new());
        true
    }

    /// Remove a node together with every edge into or out of it.
    pub fn remove_node(&mut self, node: impl Into<NodeId>) -> GraphResult<()> {
        let node = node.into();
        let outgoing = self
            .adjacency
            .remove(&node)
            .ok_or_else(|| self.not_found(&node))?;

        let mut negative = outgoing.values().filter(|w| **w < 0).count();
        for neighbors in self.adjacency.values_mut() {
            let incoming = neighbors.remove(&node);
            // Undirected incoming entries mirror outgoing ones, already counted.
            if self.directed && incoming.is_some_and(|w| w < 0) {
                negative += 1;
            }
        }
        self.negative_weights -= negative;

        log::trace!("'{}': removed node {}", self.title, node);
        Ok(())
    }

    /// Add (or overwrite) the edge `source -> target`, creating missing nodes.
    ///
    /// Unweighted graphs store weight 1 whatever `weight` is. Undirected graphs
    /// store the edge in both directions.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: Weight,
    ) -> GraphResult<()> {
        let (source, target) = (source.into(), target.into());
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        let weight = if self.weighted { weight } else { 1 };

        let previous = self
            .adjacency
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), weight);
        let reverse = self.adjacency.entry(target.clone()).or_default();
        if !self.directed {
            reverse.insert(source.clone(), weight);
        }
        self.track_negative(previous, Some(weight));

        log::trace!(
            "'{}': add edge {} -> {} ({})",
            self.title,
            source,
            target,
            weight
        );
        Ok(())
    }

    /// Remove the edge `source -> target` (both directions when undirected).
    /// Returns the removed weight as stored.
    pub fn remove_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> GraphResult<Weight> {
        let (source, target) = (source.into(), target.into());
        self.require(&source)?;
        self.require(&target)?;

        let removed = self
            .adjacency
            .get_mut(&source)
            .and_then(|neighbors| neighbors.remove(&target))
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: source.clone(),
                to: target.clone(),
            })?;
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(&target) {
                neighbors.remove(&source);
            }
        }
        self.track_negative(Some(removed), None);

        log::trace!("'{}': removed edge {} -> {}", self.title, source, target);
        Ok(removed)
    }

    /// Remove every node and edge. Flags and title are kept.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.negative_weights = 0;
    }

    /// Dense matrix over sorted node order; cell `(i, j)` is the weight of
    /// `i -> j`, 0 when absent.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let index = self.node_index();
        let n = self.order();
        let mut matrix = vec![vec![0; n]; n];
        for (i, neighbors) in self.adjacency.values().enumerate() {
            for (target, weight) in neighbors {
                matrix[i][index[target]] = *weight;
            }
        }
        matrix
    }

    /// One entry per logical edge, in ascending (source, target) order.
    ///
    /// Undirected edges are emitted once, from the smaller endpoint.
    pub fn edge_list(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.num_edges());
        for (source, neighbors) in &self.adjacency {
            for (target, weight) in neighbors {
                if self.directed || source < target {
                    edges.push(Edge {
                        source: source.clone(),
                        target: target.clone(),
                        weight: *weight,
                    });
                }
            }
        }
        edges
    }

    /// Dense index of each node in sorted order.
    pub(crate) fn node_index(&self) -> HashMap<&NodeId, usize> {
        self.adjacency
            .keys()
            .enumerate()
            .map(|(i, node)| (node, i))
            .collect()
    }

    /// Out-edges of a node known to exist; empty if it does not.
    pub(crate) fn adjacent<'a>(
        &'a self,
        node: &NodeId,
    ) -> impl Iterator<Item = (&'a NodeId, Weight)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)))
    }

    /// Error for a node missing from this graph.
    pub(crate) fn not_found(&self, node: &NodeId) -> GraphError {
        GraphError::NodeNotFound {
            node: node.clone(),
            graph: self.title.clone(),
        }
    }

    /// The neighbor mapping of `node`, or `NodeNotFound`.
    fn require(&self, node: &NodeId) -> GraphResult<&Neighbors> {
        self.adjacency.get(node).ok_or_else(|| self.not_found(node))
    }

    /// Keep `negative_weights` in step with one logical edge changing weight.
    fn track_negative(&mut self, old: Option<Weight>, new: Option<Weight>) {
        let was_negative = old.is_some_and(|w| w < 0);
        let is_negative = new.is_some_and(|w| w < 0);
        match (was_negative, is_negative) {
            (false, true) => self.negative_weights += 1,
            (true, false) => self.negative_weights -= 1,
            _ => {}
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(false, false)
    }
}
