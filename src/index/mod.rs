//! Auxiliary index structures used by the algorithm layer.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
