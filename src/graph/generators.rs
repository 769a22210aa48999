//! Classic graph constructors: complete, complete bipartite and cycle graphs.
//!
//! All generated graphs are undirected and unweighted, with nodes numbered
//! from 0.

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Complete graph `K_n`: every distinct pair of the `n` nodes is adjacent.
pub fn k_graph(n: usize) -> GraphResult<Graph> {
    if n < 1 {
        return Err(GraphError::InvalidArgument(
            "a complete graph needs at least 1 node".into(),
        ));
    }

    let mut k = Graph::with_title(format!("K_{}", n), false, false);
    for i in 0..n {
        k.add_node(i);
    }
    for u in 0..n {
        for v in u + 1..n {
            k.add_edge(u, v, 1)?;
        }
    }
    Ok(k)
}

/// Complete bipartite graph `K_{n,m}`: nodes `0..n` form one side, `n..n+m`
/// the other, and every cross pair is adjacent. Either side may be empty.
pub fn k_bipartite_graph(n: usize, m: usize) -> GraphResult<Graph> {
    let mut k = Graph::with_title(format!("K_{},{}", n, m), false, false);
    for node in 0..n + m {
        k.add_node(node);
    }
    for u in 0..n {
        for v in n..n + m {
            k.add_edge(u, v, 1)?;
        }
    }
    Ok(k)
}

/// Cycle graph `C_n`: `n` nodes in a ring. `C_1` is a single isolated node
/// and `C_2` a single edge, since parallel edges are not stored.
pub fn c_graph(n: usize) -> GraphResult<Graph> {
    if n < 1 {
        return Err(GraphError::InvalidArgument(
            "a cycle graph needs at least 1 node".into(),
        ));
    }

    let mut c = Graph::with_title(format!("C_{}", n), false, false);
    c.add_node(0usize);
    for i in 1..n {
        c.add_edge(i - 1, i, 1)?;
    }
    if n > 1 {
        c.add_edge(0usize, n - 1, 1)?;
    }
    Ok(c)
}
