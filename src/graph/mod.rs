//! Graph module for symmetric node relationships.
//!
//! This module provides the [`Graph`] struct, an undirected graph rooted at a
//! single entry node, along with the [`Node`] and [`Edge`] views it hands out.
//!
//! # Example
//!
//! ```rust
//! use graphlink::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.insert("A").unwrap();
//! graph.insert_under(&"A", "B").unwrap();
//! graph.insert_under(&"A", "C").unwrap();
//!
//! assert!(graph.link(&"B", &"C"));
//! assert!(graph.are_linked(&"C", &"B"));
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! ```

mod error;
mod node;
mod undirected_graph;

pub use error::{GraphError, GraphResult};
pub use node::{Edge, Node};
pub use undirected_graph::Graph;
