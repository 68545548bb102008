//! Directed weighted graph with single-pair shortest-route queries.
//!
//! Provides the graph value types, the in-memory store, and the route
//! types produced by [`Graph::shortest_route`].
//!
//! # Example
//!
//! ```rust
//! use routegraph_core::graph::{Edge, Graph, Node};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(Edge::new("rail", 1.0), Node::new("A"), Node::new("B")).unwrap();
//! graph.add_edge(Edge::new("rail", 2.0), Node::new("B"), Node::new("C")).unwrap();
//!
//! let route = graph.shortest_route("A", "C").expect("A reaches C");
//! assert_eq!(route.count(), 3);
//! assert_eq!(route.starting_node().map(|n| n.identifier()), Some("A"));
//! assert_eq!(route.ending_node().map(|n| n.identifier()), Some("C"));
//! ```

mod route;
mod shortest_path;
mod store;
mod types;


pub use route::{Route, RouteStep};
pub use store::Graph;
pub use types::{Edge, Node};
