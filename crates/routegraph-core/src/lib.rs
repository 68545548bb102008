//! # routegraph Core
//!
//! Directed, weighted graph engine with single-pair shortest-route queries.
//!
//! Nodes are identified by unique strings and carry an optional title plus an
//! open-ended JSON metadata bag. Edges are directed, weighted (default 1.0),
//! and optionally named. Routes are computed with Dijkstra relaxation over an
//! index-stable node arena.
//!
//! ## Quick Start
//!
//! ```rust
//! use routegraph_core::{Edge, Graph, Node};
//!
//! let mut graph = Graph::new();
//!
//! // Adding an edge registers any endpoint the graph has not seen yet.
//! graph.add_edge(Edge::new("highway", 1.0), Node::new("A"), Node::new("B")).unwrap();
//! graph.add_edge(Edge::new("highway", 2.0), Node::new("B"), Node::new("C")).unwrap();
//! graph.add_edge(Edge::new("ferry", 10.0), Node::new("A"), Node::new("C")).unwrap();
//!
//! let route = graph.shortest_route("A", "C").expect("C is reachable from A");
//! assert_eq!(route.count(), 3);
//! assert!((route.total_weight() - 3.0).abs() < f64::EPSILON);
//!
//! // Unreachable pairs and unknown identifiers yield None, never a panic.
//! assert!(graph.shortest_route("C", "A").is_none());
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(clippy::float_cmp, clippy::uninlined_format_args, clippy::doc_markdown)
)]

pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node, Route, RouteStep};
