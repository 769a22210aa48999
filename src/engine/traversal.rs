//! Breadth-first and depth-first traversal orders.

use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;
use crate::types::{GraphResult, NodeId};

/// BFS order from `start`: every reachable node once, level by level.
pub fn bfs_order(graph: &Graph, start: impl Into<NodeId>) -> GraphResult<Vec<NodeId>> {
    bfs_order_with(graph, start, |_| {})
}

/// BFS order from `start`, calling `visit` on each node as it is visited.
///
/// The callback only observes; it has no effect on the order.
pub fn bfs_order_with<F>(
    graph: &Graph,
    start: impl Into<NodeId>,
    mut visit: F,
) -> GraphResult<Vec<NodeId>>
where
    F: FnMut(&NodeId),
{
    let start = start.into();
    if !graph.has_node(&start) {
        return Err(graph.not_found(&start));
    }

    let mut discovered: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order: Vec<NodeId> = Vec::new();

    discovered.insert(start.clone());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visit(&current);
        for (neighbor, _) in graph.adjacent(&current) {
            if discovered.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
        order.push(current);
    }

    Ok(order)
}

/// DFS order from `start`, using an explicit stack.
pub fn dfs_order(graph: &Graph, start: impl Into<NodeId>) -> GraphResult<Vec<NodeId>> {
    dfs_order_with(graph, start, |_| {})
}

/// DFS order from `start`, calling `visit` on each node as it is recorded.
///
/// All undiscovered neighbors of a popped node are pushed before the next pop,
/// so a node is recorded the first time it comes off the stack.
pub fn dfs_order_with<F>(
    graph: &Graph,
    start: impl Into<NodeId>,
    visit: F,
) -> GraphResult<Vec<NodeId>>
where
    F: FnMut(&NodeId),
{
    let start = start.into();
    if !graph.has_node(&start) {
        return Err(graph.not_found(&start));
    }
    Ok(dfs_walk(graph, start, visit))
}

/// DFS from a node known to be in `graph`.
pub(crate) fn dfs_walk<F>(graph: &Graph, start: NodeId, mut visit: F) -> Vec<NodeId>
where
    F: FnMut(&NodeId),
{
    let mut discovered: HashSet<NodeId> = HashSet::new();
    let mut recorded: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut order: Vec<NodeId> = Vec::new();

    discovered.insert(start.clone());
    stack.push(start);

    while let Some(current) = stack.pop() {
        for (neighbor, _) in graph.adjacent(&current) {
            if discovered.insert(neighbor.clone()) {
                stack.push(neighbor.clone());
            }
        }
        if recorded.insert(current.clone()) {
            visit(&current);
            order.push(current);
        }
    }

    order
}

/// Whether `target` is reachable from `start`, found by BFS.
pub fn bfs_contains(
    graph: &Graph,
    start: impl Into<NodeId>,
    target: impl Into<NodeId>,
) -> GraphResult<bool> {
    let target = target.into();
    let mut found = false;
    bfs_order_with(graph, start, |node| found |= *node == target)?;
    Ok(found)
}

/// Whether `target` is reachable from `start`, found by DFS.
pub fn dfs_contains(
    graph: &Graph,
    start: impl Into<NodeId>,
    target: impl Into<NodeId>,
) -> GraphResult<bool> {
    let target = target.into();
    let mut found = false;
    dfs_order_with(graph, start, |node| found |= *node == target)?;
    Ok(found)
}
