//! Graph value types: nodes and the directed edges that connect them.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A vertex in the graph.
///
/// Every node carries a string identifier that must be unique within a
/// graph, an optional human-readable title, and an open-ended metadata map
/// for caller payloads (coordinates, references, display hints).
///
/// # Example
///
/// ```rust
/// use routegraph_core::graph::Node;
/// use serde_json::json;
///
/// let node = Node::new("ORD")
///     .with_title("Chicago O'Hare")
///     .with_metadata_value("lat", json!(41.97));
///
/// assert_eq!(node.identifier(), "ORD");
/// assert_eq!(node.title(), Some("Chicago O'Hare"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, Value>,
}

impl Node {
    /// Creates a new node with the given identifier.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: None,
            metadata: HashMap::new(),
        }
    }

    /// Sets the title (builder pattern).
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Replaces the metadata map (builder pattern).
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Inserts a single metadata entry (builder pattern).
    #[must_use]
    pub fn with_metadata_value(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Returns the unique identifier.
    ///
    /// The identifier is a node's identity within a graph; changing a
    /// registered node's identifier is not supported.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the optional title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns all metadata entries.
    #[must_use]
    pub fn metadata(&self) -> &HashMap<String, Value> {
        &self.metadata
    }

    /// Returns a specific metadata value, if it exists.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Sets a metadata value.
    pub fn set_metadata_value(&mut self, key: &str, value: Value) {
        self.metadata.insert(key.to_string(), value);
    }
}

/// Two nodes are equal when their identifiers match; title and metadata do
/// not participate in equality or hashing.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

/// A directed, weighted connection between two nodes.
///
/// The weight defaults to 1.0 and the name is an optional label such as the
/// road or flight the edge depicts. Both are freely mutable; weight
/// validation happens when the edge is inserted into a [`Graph`], not here.
///
/// [`Graph`]: super::Graph
///
/// # Example
///
/// ```rust
/// use routegraph_core::graph::Edge;
///
/// let edge = Edge::new("I-90", 4.5);
/// assert_eq!(edge.name(), Some("I-90"));
/// assert_eq!(edge.weight(), 4.5);
///
/// let default = Edge::named("footpath");
/// assert_eq!(default.weight(), 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Default for Edge {
    fn default() -> Self {
        Self {
            weight: Self::DEFAULT_WEIGHT,
            name: None,
        }
    }
}

impl Edge {
    /// Weight assigned when none is specified.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Creates a named edge with the given weight.
    #[must_use]
    pub fn new(name: &str, weight: f64) -> Self {
        Self {
            weight,
            name: Some(name.to_string()),
        }
    }

    /// Creates a named edge with the default weight.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(name, Self::DEFAULT_WEIGHT)
    }

    /// Creates an unnamed edge with the given weight.
    #[must_use]
    pub fn weighted(weight: f64) -> Self {
        Self { weight, name: None }
    }

    /// Returns the weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the optional name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Sets the name.
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }
}
