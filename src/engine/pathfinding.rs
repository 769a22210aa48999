//! Shortest paths: Dijkstra, Bellman–Ford and Floyd–Warshall.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::graph::Graph;
use crate::types::{
    Distance, Edge, GraphError, GraphResult, NodeId, PathLength, BELLMAN_FORD_SPT_SUFFIX,
    DIJKSTRA_SPT_SUFFIX,
};

/// Single-source result: the shortest-path tree plus every node's distance.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// The source node.
    pub source: NodeId,
    /// Tree of parent -> child edges, rooted at `source`, with the input's
    /// directedness and weightedness.
    pub tree: Graph,
    /// Distance from `source` for every node of the input graph.
    pub distances: BTreeMap<NodeId, Distance>,
    /// Predecessor of each reached node other than the source.
    pub parents: BTreeMap<NodeId, NodeId>,
}

impl ShortestPaths {
    /// Distance to `node`; `Infinite` for unreachable or unknown nodes.
    pub fn distance(&self, node: impl Into<NodeId>) -> Distance {
        self.distances
            .get(&node.into())
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Node sequence from the source to `target`, if reachable.
    pub fn path_to(&self, target: impl Into<NodeId>) -> Option<Vec<NodeId>> {
        let target = target.into();
        if !self.distance(&target).is_finite() {
            return None;
        }
        let mut path = vec![target];
        while let Some(parent) = path.last().and_then(|node| self.parents.get(node)) {
            path.push(parent.clone());
        }
        path.reverse();
        Some(path)
    }
}

/// All-pairs distances over sorted node order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    /// Row/column labels, ascending.
    pub nodes: Vec<NodeId>,
    /// `distances[i][j]` is the shortest distance from `nodes[i]` to `nodes[j]`.
    pub distances: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    /// Distance between two nodes, if both are present.
    pub fn get(&self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Option<Distance> {
        let (source, target) = (source.into(), target.into());
        let i = self.nodes.binary_search(&source).ok()?;
        let j = self.nodes.binary_search(&target).ok()?;
        Some(self.distances[i][j])
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Dijkstra's algorithm from `source`.
///
/// Fails with `InvalidGraph` if any edge weight is negative. Superseded
/// frontier entries are skipped when popped rather than removed.
pub fn dijkstra(graph: &Graph, source: impl Into<NodeId>) -> GraphResult<ShortestPaths> {
    if graph.negative_weights() > 0 {
        return Err(GraphError::InvalidGraph(
            "Dijkstra's algorithm requires non-negative edge weights".into(),
        ));
    }
    let source = source.into();
    if !graph.has_node(&source) {
        return Err(graph.not_found(&source));
    }

    let mut distances = initial_distances(graph, &source);
    let mut parents: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut frontier: BinaryHeap<Reverse<(PathLength, NodeId)>> = BinaryHeap::new();
    frontier.push(Reverse((0, source.clone())));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        let settled = distances.get(&current).copied().unwrap_or(Distance::Infinite);
        if Distance::Finite(distance) > settled {
            continue;
        }
        for (neighbor, weight) in graph.adjacent(&current) {
            let tentative = distance + PathLength::from(weight);
            let known = distances.get(neighbor).copied().unwrap_or(Distance::Infinite);
            if Distance::Finite(tentative) < known {
                distances.insert(neighbor.clone(), Distance::Finite(tentative));
                parents.insert(neighbor.clone(), current.clone());
                frontier.push(Reverse((tentative, neighbor.clone())));
            }
        }
    }

    log::debug!(
        "dijkstra on '{}' from {}: {} of {} nodes reached",
        graph.title(),
        source,
        parents.len() + 1,
        graph.order()
    );
    let tree = shortest_path_tree(graph, DIJKSTRA_SPT_SUFFIX, &source, &parents)?;
    Ok(ShortestPaths {
        source,
        tree,
        distances,
        parents,
    })
}

/// Bellman–Ford from `source`; negative weights allowed.
///
/// Undirected edges are relaxed both ways, so any negative undirected edge
/// reachable from `source` is itself a negative cycle. Fails with
/// `NegativeCycle` if the `order()`-th pass still relaxes an edge.
pub fn bellman_ford(graph: &Graph, source: impl Into<NodeId>) -> GraphResult<ShortestPaths> {
    let source = source.into();
    if !graph.has_node(&source) {
        return Err(graph.not_found(&source));
    }

    let edges = relaxation_edges(graph);
    let mut distances = initial_distances(graph, &source);
    let mut parents: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let passes = graph.order();

    for pass in 0..passes {
        let mut relaxed = false;
        for edge in &edges {
            let Some(from) = distances.get(&edge.source).and_then(|d| d.finite()) else {
                continue;
            };
            let tentative = Distance::Finite(from + PathLength::from(edge.weight));
            let known = distances.get(&edge.target).copied().unwrap_or(Distance::Infinite);
            if tentative < known {
                if pass + 1 == passes {
                    log::warn!(
                        "bellman-ford on '{}': negative cycle through {}",
                        graph.title(),
                        edge.target
                    );
                    return Err(GraphError::NegativeCycle);
                }
                distances.insert(edge.target.clone(), tentative);
                parents.insert(edge.target.clone(), edge.source.clone());
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }

    log::debug!(
        "bellman-ford on '{}' from {}: {} of {} nodes reached",
        graph.title(),
        source,
        parents.len() + 1,
        graph.order()
    );
    let tree = shortest_path_tree(graph, BELLMAN_FORD_SPT_SUFFIX, &source, &parents)?;
    Ok(ShortestPaths {
        source,
        tree,
        distances,
        parents,
    })
}

/// All-pairs shortest distances by Floyd–Warshall.
///
/// Seeded with 0 on the diagonal, the edge weight where an edge exists and
/// `Infinite` elsewhere. Fails with `NegativeCycle` as soon as a diagonal
/// entry drops below zero.
pub fn floyd_warshall(graph: &Graph) -> GraphResult<DistanceMatrix> {
    let nodes: Vec<NodeId> = graph.nodes().cloned().collect();
    let n = nodes.len();
    let index = graph.node_index();

    let mut distances = vec![vec![Distance::Infinite; n]; n];
    for (i, node) in nodes.iter().enumerate() {
        distances[i][i] = Distance::ZERO;
        for (neighbor, weight) in graph.adjacent(node) {
            distances[i][index[neighbor]] = Distance::from(weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if !distances[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                let through_k = distances[i][k].join(distances[k][j]);
                if through_k < distances[i][j] {
                    distances[i][j] = through_k;
                }
            }
        }
        if distances[k][k] < Distance::ZERO {
            log::warn!(
                "floyd-warshall on '{}': negative cycle through {}",
                graph.title(),
                nodes[k]
            );
            return Err(GraphError::NegativeCycle);
        }
    }

    Ok(DistanceMatrix { nodes, distances })
}

/// Every node at `Infinite` except `source` at zero.
fn initial_distances(graph: &Graph, source: &NodeId) -> BTreeMap<NodeId, Distance> {
    let mut distances: BTreeMap<NodeId, Distance> = graph
        .nodes()
        .map(|node| (node.clone(), Distance::Infinite))
        .collect();
    distances.insert(source.clone(), Distance::ZERO);
    distances
}

/// Directed edges to relax: the edge list, plus reversals when undirected.
fn relaxation_edges(graph: &Graph) -> Vec<Edge> {
    let edges = graph.edge_list();
    if graph.is_directed() {
        return edges;
    }
    edges
        .into_iter()
        .flat_map(|edge| {
            let reverse = Edge {
                source: edge.target.clone(),
                target: edge.source.clone(),
                weight: edge.weight,
            };
            [edge, reverse]
        })
        .collect()
}

/// Tree of `parent -> child` edges copied from `graph`, rooted at `source`.
fn shortest_path_tree(
    graph: &Graph,
    suffix: &str,
    source: &NodeId,
    parents: &BTreeMap<NodeId, NodeId>,
) -> GraphResult<Graph> {
    let mut tree = Graph::with_title(
        format!("{}{}", graph.title(), suffix),
        graph.is_directed(),
        graph.is_weighted(),
    );
    tree.add_node(source);
    for (child, parent) in parents {
        tree.add_edge(parent, child, graph.weight(parent, child)?)?;
    }
    Ok(tree)
}
