//! Minimum spanning trees for connected, undirected graphs.
//!
//! Both algorithms return a fresh graph titled `<title>_(mst)` holding every
//! node of the input and `order() - 1` edges. Graphs of order 0 or 1 are
//! returned as an unchanged copy.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::Graph;
use crate::index::DisjointSet;
use crate::types::{GraphError, GraphResult, NodeId, Weight, MST_SUFFIX};

use super::analysis::get_components;

/// Minimum spanning tree by Kruskal's algorithm.
///
/// Edges are taken in ascending weight; ties keep edge-list order.
pub fn kruskal(graph: &Graph) -> GraphResult<Graph> {
    if graph.order() <= 1 {
        return Ok(graph.clone());
    }
    check_spanning_preconditions(graph, "Kruskal")?;

    let mut mst = empty_tree(graph);
    let index = graph.node_index();
    let mut sets = DisjointSet::new(graph.order());

    let mut pool = graph.edge_list();
    pool.sort_by_key(|edge| edge.weight);

    let mut accepted = 0;
    for edge in pool {
        let (u, v) = (index[&edge.source], index[&edge.target]);
        if sets.union(u, v) {
            log::debug!(
                "kruskal: adding edge ({}, {}, {})",
                edge.source,
                edge.target,
                edge.weight
            );
            mst.add_edge(edge.source, edge.target, edge.weight)?;
            accepted += 1;
            if accepted + 1 == graph.order() {
                break;
            }
        }
    }
    Ok(mst)
}

/// Minimum spanning tree by Prim's algorithm, grown from the smallest node.
///
/// Uses a lazy frontier: stale candidates whose destination is already in
/// the tree are discarded when popped.
pub fn prim(graph: &Graph) -> GraphResult<Graph> {
    let mut nodes = graph.nodes();
    let (Some(start), Some(_)) = (nodes.next(), nodes.next()) else {
        return Ok(graph.clone());
    };
    let start = start.clone();
    check_spanning_preconditions(graph, "Prim")?;

    let mut mst = empty_tree(graph);

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(Weight, NodeId, NodeId)>> = BinaryHeap::new();
    push_crossing_edges(graph, &start, &visited, &mut frontier);
    visited.insert(start);

    while let Some(Reverse((weight, source, target))) = frontier.pop() {
        if visited.contains(&target) {
            continue;
        }
        log::debug!("prim: adding edge ({}, {}, {})", source, target, weight);
        mst.add_edge(source, target.clone(), weight)?;
        visited.insert(target.clone());
        push_crossing_edges(graph, &target, &visited, &mut frontier);
    }
    Ok(mst)
}

fn check_spanning_preconditions(graph: &Graph, algorithm: &str) -> GraphResult<()> {
    if graph.is_directed() {
        return Err(GraphError::InvalidGraph(format!(
            "{}'s algorithm may only be applied to undirected graphs",
            algorithm
        )));
    }
    let components = get_components(graph, false).len();
    if components != 1 {
        return Err(GraphError::Disconnected { components });
    }
    Ok(())
}

/// Same nodes and flags as `graph`, no edges.
fn empty_tree(graph: &Graph) -> Graph {
    let mut tree = Graph::with_title(
        format!("{}{}", graph.title(), MST_SUFFIX),
        false,
        graph.is_weighted(),
    );
    for node in graph.nodes() {
        tree.add_node(node);
    }
    tree
}

fn push_crossing_edges(
    graph: &Graph,
    node: &NodeId,
    visited: &HashSet<NodeId>,
    frontier: &mut BinaryHeap<Reverse<(Weight, NodeId, NodeId)>>,
) {
    for (neighbor, weight) in graph.adjacent(node) {
        if !visited.contains(neighbor) {
            frontier.push(Reverse((weight, node.clone(), neighbor.clone())));
        }
    }
}
