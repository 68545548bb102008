//! In-memory graph store: node registry plus directed adjacency.

use std::collections::HashSet;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

use super::route::Route;
use super::shortest_path;
use super::types::{Edge, Node};

/// A directed, weighted graph over uniquely identified nodes.
///
/// Nodes live in an index-stable arena; an identifier index maps strings to
/// arena slots and each slot owns an insertion-ordered map of outgoing
/// edges keyed by destination slot. The arena keeps the relaxation loop on
/// integer indices instead of repeated string lookups.
///
/// The graph is single-writer: queries take `&self`, mutation takes
/// `&mut self`, and callers needing shared access serialize externally.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, in registration order.
    nodes: Vec<Node>,
    /// Identifier -> arena slot.
    index: FxHashMap<String, usize>,
    /// Outgoing edges per arena slot: destination slot -> edge.
    outgoing: Vec<IndexMap<usize, Edge>>,
}

impl Graph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(expected_nodes),
            index: FxHashMap::with_capacity_and_hasher(expected_nodes, Default::default()),
            outgoing: Vec::with_capacity(expected_nodes),
        }
    }

    // ── Node access ────────────────────────────────────────────────────

    /// Returns the total number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node with the given identifier, if registered.
    #[must_use]
    pub fn get_node(&self, identifier: &str) -> Option<&Node> {
        self.index.get(identifier).map(|&slot| &self.nodes[slot])
    }

    /// Returns true if a node with the given identifier is registered.
    #[must_use]
    pub fn has_node(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Returns all registered nodes.
    #[must_use]
    pub fn all_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().collect()
    }

    /// Registers a node explicitly.
    ///
    /// Most callers never need this: [`Graph::add_edge`] registers unseen
    /// endpoints on the fly. Explicit registration is for isolated nodes or
    /// for attaching titles and metadata up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeExists`] if the identifier is already taken.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.index.contains_key(node.identifier()) {
            return Err(Error::NodeExists(node.identifier().to_string()));
        }
        self.intern(node);
        Ok(())
    }

    // ── Edge access ────────────────────────────────────────────────────

    /// Returns a count of directed edges. A bidirectional connection
    /// counts as two, or one when both endpoints coincide.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(IndexMap::len).sum()
    }

    /// Returns the edge from `from` to `to`, or `None` if either node is
    /// unknown or no such edge exists.
    #[must_use]
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.outgoing[from].get(&to)
    }

    /// Returns the weight of the edge from `from` to `to`.
    ///
    /// Convenience wrapper around [`Graph::edge_between`]; `None` under the
    /// same conditions, distinguishable from a zero weight.
    #[must_use]
    pub fn weight_between(&self, from: &str, to: &str) -> Option<f64> {
        self.edge_between(from, to).map(Edge::weight)
    }

    /// Returns every node that `identifier` has an outgoing edge to.
    ///
    /// `None` if the node is not registered; an empty set if it is
    /// registered but has no outgoing edges.
    #[must_use]
    pub fn neighbors(&self, identifier: &str) -> Option<HashSet<&Node>> {
        let slot = *self.index.get(identifier)?;
        Some(
            self.outgoing[slot]
                .keys()
                .map(|&to| &self.nodes[to])
                .collect(),
        )
    }

    /// Returns the neighbors of the given node value.
    ///
    /// Convenience wrapper around [`Graph::neighbors`]; the lookup is by
    /// identifier, so any node value with a matching identifier works.
    #[must_use]
    pub fn neighbors_of(&self, node: &Node) -> Option<HashSet<&Node>> {
        self.neighbors(node.identifier())
    }

    /// Returns the number of outgoing edges from a node, or `None` if the
    /// node is not registered.
    #[must_use]
    pub fn out_degree(&self, identifier: &str) -> Option<usize> {
        self.index
            .get(identifier)
            .map(|&slot| self.outgoing[slot].len())
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Adds a directed, weighted edge between two nodes.
    ///
    /// Endpoints the graph has not seen yet are registered; already
    /// registered endpoints keep their stored node value untouched. Any
    /// prior edge from `from` to `to` is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if the edge weight is negative or
    /// non-finite.
    pub fn add_edge(&mut self, edge: Edge, from: Node, to: Node) -> Result<()> {
        Self::validate_weight(&edge)?;
        let from_slot = self.intern(from);
        let to_slot = self.intern(to);
        tracing::debug!(
            from = %self.nodes[from_slot].identifier(),
            to = %self.nodes[to_slot].identifier(),
            weight = edge.weight(),
            "edge added"
        );
        self.outgoing[from_slot].insert(to_slot, edge);
        Ok(())
    }

    /// Removes the directed edge from `from` to `to`, if present.
    ///
    /// Returns whether a removal occurred. The nodes themselves stay
    /// registered.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(&from_slot), Some(&to_slot)) = (self.index.get(from), self.index.get(to))
        else {
            return false;
        };
        let removed = self.outgoing[from_slot].shift_remove(&to_slot).is_some();
        if removed {
            tracing::debug!(from = %from, to = %to, "edge removed");
        }
        removed
    }

    /// Adds a weighted edge travelling in both directions between two nodes.
    ///
    /// Each direction receives its own copy of the edge, so mutating one
    /// direction later never affects the other. When both endpoints
    /// coincide the two directions collapse into a single self-loop entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if the edge weight is negative or
    /// non-finite.
    pub fn add_bidirectional_edge(&mut self, edge: Edge, a: Node, b: Node) -> Result<()> {
        Self::validate_weight(&edge)?;
        let a_slot = self.intern(a);
        let b_slot = self.intern(b);
        self.outgoing[a_slot].insert(b_slot, edge.clone());
        self.outgoing[b_slot].insert(a_slot, edge);
        Ok(())
    }

    /// Removes a bidirectional edge between two nodes.
    ///
    /// All-or-nothing: if either direction is missing, nothing is removed
    /// and `false` is returned. For a self-loop the two directions are the
    /// same entry; removing it returns `true`.
    pub fn remove_bidirectional_edge(&mut self, a: &str, b: &str) -> bool {
        let (Some(&a_slot), Some(&b_slot)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        if !self.outgoing[a_slot].contains_key(&b_slot) || !self.outgoing[b_slot].contains_key(&a_slot)
        {
            return false;
        }
        self.outgoing[a_slot].shift_remove(&b_slot);
        self.outgoing[b_slot].shift_remove(&a_slot);
        tracing::debug!(a = %a, b = %b, "bidirectional edge removed");
        true
    }

    /// Clears all nodes and edges from the graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.outgoing.clear();
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns the cheapest route from `start` to `end`, or `None` if
    /// either node is unknown or no route exists.
    ///
    /// A route from a node to itself is a single zero-length step. When
    /// several routes share the minimum cost, which one is returned is
    /// unspecified.
    #[must_use]
    pub fn shortest_route(&self, start: &str, end: &str) -> Option<Route<'_>> {
        shortest_path::shortest_route(self, start, end)
    }

    // ── Internal ───────────────────────────────────────────────────────

    fn validate_weight(edge: &Edge) -> Result<()> {
        let weight = edge.weight();
        if weight < 0.0 || !weight.is_finite() {
            return Err(Error::InvalidWeight { weight });
        }
        Ok(())
    }

    /// Returns the arena slot for a node, registering it if unseen.
    fn intern(&mut self, node: Node) -> usize {
        if let Some(&slot) = self.index.get(node.identifier()) {
            return slot;
        }
        let slot = self.nodes.len();
        self.index.insert(node.identifier().to_string(), slot);
        self.nodes.push(node);
        self.outgoing.push(IndexMap::new());
        slot
    }

    pub(crate) fn slot_of(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }

    pub(crate) fn node_at(&self, slot: usize) -> &Node {
        &self.nodes[slot]
    }

    pub(crate) fn outgoing_at(&self, slot: usize) -> &IndexMap<usize, Edge> {
        &self.outgoing[slot]
    }

    pub(crate) fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}
