//! Read-only views of a graph for report writers and visualizers.

use std::fmt;

use serde::Serialize;

use crate::types::{Edge, NodeId, REPORT_EXTENSION};

use super::Graph;

const DIVIDER_WIDTH: usize = 90;
const INDENT: &str = "   ";
const CELL_WIDTH: usize = 5;
const ROW_HEADER_WIDTH: usize = 6;
const EDGE_TABLE_WIDTH: usize = 35;

/// Everything a drawing layer needs to lay out a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphView {
    /// Display title.
    pub title: String,
    /// Whether edges need arrowheads.
    pub directed: bool,
    /// Whether edge weights should be labelled.
    pub weighted: bool,
    /// Nodes in ascending order.
    pub nodes: Vec<NodeId>,
    /// One entry per logical edge.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Snapshot of the node list, edge list and flags.
    pub fn view(&self) -> GraphView {
        GraphView {
            title: self.title().to_owned(),
            directed: self.is_directed(),
            weighted: self.is_weighted(),
            nodes: self.nodes().cloned().collect(),
            edges: self.edge_list(),
        }
    }

    /// File name a report of this graph is written under: the title with
    /// spaces replaced by underscores, plus the text extension.
    pub fn report_file_name(&self) -> String {
        format!("{}.{}", self.title().replace(' ', "_"), REPORT_EXTENSION)
    }
}

/// Deterministic text report: header, node list, adjacency list, adjacency
/// matrix and sorted edge list. Built only from public accessors.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "=".repeat(DIVIDER_WIDTH);
        let nodes: Vec<&NodeId> = self.nodes().collect();

        writeln!(f, "{}", divider)?;
        writeln!(f, "\"{}\"", self.title())?;
        writeln!(
            f,
            "{}, {}",
            if self.is_directed() { "Directed" } else { "Undirected" },
            if self.is_weighted() { "Weighted" } else { "Unweighted" }
        )?;
        writeln!(f, "{}", divider)?;
        writeln!(f)?;

        writeln!(f, "Nodes:")?;
        let names: Vec<&str> = nodes.iter().map(|n| n.as_str()).collect();
        writeln!(f, "[{}]", names.join(", "))?;
        writeln!(f)?;

        section(f, &divider, "Adjacency List")?;
        for node in &nodes {
            writeln!(f, "{}Node {}:", INDENT, node)?;
            let neighbors = self
                .neighbors_with_weights(*node)
                .map_err(|_| fmt::Error)?;
            let mut empty = true;
            for (neighbor, weight) in neighbors {
                empty = false;
                writeln!(f, "{0}{0}Node {1}, Weight: {2}", INDENT, neighbor, weight)?;
            }
            if empty {
                writeln!(f, "{0}{0}No adjacencies", INDENT)?;
            }
        }
        writeln!(f)?;

        section(f, &divider, "Adjacency Matrix")?;
        writeln!(f)?;
        let rule = "-".repeat(ROW_HEADER_WIDTH + CELL_WIDTH * nodes.len());
        writeln!(f, "{}", rule)?;
        write!(f, "{}", " ".repeat(ROW_HEADER_WIDTH))?;
        for node in &nodes {
            write!(f, "{:>width$}", node, width = CELL_WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        for (node, row) in nodes.iter().zip(self.adjacency_matrix()) {
            write!(f, "{}{} |", INDENT, node)?;
            for value in row {
                write!(f, "{:>width$}", value, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        if self.is_directed() {
            section(f, &divider, "Edge List")?;
        } else {
            section(
                f,
                &divider,
                "Edge List\nUndirected graph: edges are bidirectional",
            )?;
        }
        writeln!(f)?;
        let edge_rule = "-".repeat(EDGE_TABLE_WIDTH);
        writeln!(f, "{}", edge_rule)?;
        let (left, right) = if self.is_directed() {
            ("Source", "Destination")
        } else {
            ("Node", "Node")
        };
        writeln!(f, "{:>10}{:>15}{:>10}", left, right, "Weight")?;
        write!(f, "{}", edge_rule)?;

        let mut edges = self.edge_list();
        edges.sort();
        for edge in edges {
            write!(
                f,
                "\n{:>10}{:>15}{:>10}",
                edge.source, edge.target, edge.weight
            )?;
        }
        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, divider: &str, text: &str) -> fmt::Result {
    writeln!(f, "{}", divider)?;
    writeln!(f, "{}", text)?;
    writeln!(f, "{}", divider)
}
