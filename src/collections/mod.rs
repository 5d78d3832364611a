//! Auxiliary collections used by the graph analyses.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
