//! Structural analysis: connected components, cycle detection, Eulerian checks.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, NodeId};

use super::traversal::dfs_walk;

/// Components reachable by repeated DFS from the smallest remaining node.
///
/// For directed graphs this follows edge direction, so a "component" is the
/// set reachable from its seed. With `sort`, members are sorted and components
/// are listed largest first.
pub fn get_components(graph: &Graph, sort: bool) -> Vec<Vec<NodeId>> {
    let mut remaining: BTreeSet<NodeId> = graph.nodes().cloned().collect();
    let mut components: Vec<Vec<NodeId>> = Vec::new();

    while let Some(seed) = remaining.first().cloned() {
        let mut component = dfs_walk(graph, seed, |_| {});
        for node in &component {
            remaining.remove(node);
        }
        if sort {
            component.sort();
        }
        components.push(component);
    }

    if sort {
        components.sort_by(|a, b| b.len().cmp(&a.len()));
    }
    components
}

/// One frame of the explicit DFS used by [`has_cycles`].
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    neighbors: Vec<NodeId>,
    next: usize,
}

impl Frame {
    fn new(graph: &Graph, node: NodeId, parent: Option<NodeId>) -> Self {
        let neighbors = graph.adjacent(&node).map(|(n, _)| n.clone()).collect();
        Self {
            node,
            parent,
            neighbors,
            next: 0,
        }
    }
}

/// Whether the graph contains a cycle.
///
/// A cycle is reported when DFS meets a node on the active path. In undirected
/// graphs the edge just used to arrive (back to the parent) does not count.
pub fn has_cycles(graph: &Graph) -> bool {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();

    for root in graph.nodes() {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root.clone());
        on_path.insert(root.clone());
        let mut stack = vec![Frame::new(graph, root.clone(), None)];

        while let Some(frame) = stack.last_mut() {
            let Some(neighbor) = frame.neighbors.get(frame.next).cloned() else {
                on_path.remove(&frame.node);
                stack.pop();
                continue;
            };
            frame.next += 1;

            if visited.insert(neighbor.clone()) {
                on_path.insert(neighbor.clone());
                let parent = Some(frame.node.clone());
                stack.push(Frame::new(graph, neighbor, parent));
            } else if on_path.contains(&neighbor)
                && (graph.is_directed() || frame.parent.as_ref() != Some(&neighbor))
            {
                log::debug!("'{}': cycle closes at {}", graph.title(), neighbor);
                return true;
            }
        }
    }
    false
}

/// Degree condition for an Eulerian circuit: in-degree equals out-degree for
/// every node (directed), or every degree is even (undirected).
///
/// Connectivity is not checked; see [`eulerian_circuit`].
pub fn is_eulerian(graph: &Graph) -> bool {
    let mut in_degree: HashMap<&NodeId, usize> = HashMap::new();
    if graph.is_directed() {
        for node in graph.nodes() {
            for (target, _) in graph.adjacent(node) {
                *in_degree.entry(target).or_default() += 1;
            }
        }
    }

    graph.nodes().all(|node| {
        let out_degree = graph.adjacent(node).count();
        if graph.is_directed() {
            in_degree.get(node).copied().unwrap_or(0) == out_degree
        } else {
            out_degree % 2 == 0
        }
    })
}

/// Extension: an Eulerian circuit by Hierholzer's algorithm.
///
/// Returns a closed walk using every edge exactly once, starting and ending
/// at the smallest node with an outgoing edge. An edgeless graph yields an
/// empty walk. Fails with `InvalidGraph` when the degree condition fails or
/// the edges do not all lie in one connected piece.
pub fn eulerian_circuit(graph: &Graph) -> GraphResult<Vec<NodeId>> {
    if !is_eulerian(graph) {
        return Err(GraphError::InvalidGraph(
            "degree condition for an Eulerian circuit does not hold".into(),
        ));
    }

    let mut unused: BTreeMap<NodeId, BTreeSet<NodeId>> = graph
        .nodes()
        .map(|node| {
            let targets = graph.adjacent(node).map(|(n, _)| n.clone()).collect();
            (node.clone(), targets)
        })
        .collect();

    let Some(start) = unused
        .iter()
        .find(|(_, targets)| !targets.is_empty())
        .map(|(node, _)| node.clone())
    else {
        return Ok(Vec::new());
    };

    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.num_edges() + 1);
    while let Some(current) = stack.last().cloned() {
        let next = unused
            .get_mut(&current)
            .and_then(|targets| targets.pop_first());
        match next {
            Some(next) => {
                if !graph.is_directed() {
                    if let Some(back) = unused.get_mut(&next) {
                        back.remove(&current);
                    }
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                circuit.push(current);
            }
        }
    }
    circuit.reverse();

    if circuit.len() != graph.num_edges() + 1 {
        return Err(GraphError::InvalidGraph(
            "edges do not form a single connected piece".into(),
        ));
    }
    Ok(circuit)
}
