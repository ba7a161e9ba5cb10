//! graphlink - In-memory undirected graph with reachability-based lookup
//!
//! This crate provides a generic graph whose links are always symmetric and
//! whose nodes are found by a depth-first search from a single root.

pub mod graph;
