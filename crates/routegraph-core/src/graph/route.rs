//! Route types produced by shortest-route queries.
//!
//! A [`Route`] is a transient view into a graph: its steps borrow the nodes
//! and edges the graph owns, so a route is queried, read, and discarded
//! without ever copying graph state.

use std::fmt;

use super::types::{Edge, Node};

/// One hop of a route: the node departed from plus, when this is not the
/// final step, the edge taken to the next step's node.
#[derive(Debug, Clone, Copy)]
pub struct RouteStep<'g> {
    node: &'g Node,
    edge: Option<&'g Edge>,
    is_first: bool,
}

impl<'g> RouteStep<'g> {
    /// Returns the node this step departs from.
    #[must_use]
    pub fn node(&self) -> &'g Node {
        self.node
    }

    /// Returns the edge taken to the next step, or `None` on the final step.
    #[must_use]
    pub fn edge(&self) -> Option<&'g Edge> {
        self.edge
    }

    /// Returns true if this is the first step of its route.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Returns true if this is the final step, i.e. it carries no edge.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.edge.is_none()
    }
}

/// An ordered sequence of steps between a start and end node.
///
/// Routes are built step by step: the first appended step becomes the
/// beginning of the route, and the final step is expected to carry no edge.
#[derive(Debug, Clone, Default)]
pub struct Route<'g> {
    steps: Vec<RouteStep<'g>>,
}

impl<'g> Route<'g> {
    /// Creates an empty route.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step departing from `node` via `edge`.
    ///
    /// Position determines the step's role: the first appended step is the
    /// beginning step, and a step appended with no edge ends the route.
    pub fn add_step(&mut self, node: &'g Node, edge: Option<&'g Edge>) {
        let is_first = self.steps.is_empty();
        self.steps.push(RouteStep {
            node,
            edge,
            is_first,
        });
    }

    /// Returns the steps in travel order.
    #[must_use]
    pub fn steps(&self) -> &[RouteStep<'g>] {
        &self.steps
    }

    /// Returns the number of steps, counting both endpoints.
    #[must_use]
    pub fn count(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the route has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the sum of all step edge weights.
    ///
    /// The final step carries no edge and contributes zero, so a
    /// single-step route has weight 0.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.steps
            .iter()
            .filter_map(|step| step.edge)
            .map(Edge::weight)
            .sum()
    }

    /// Returns the node the route starts from.
    #[must_use]
    pub fn starting_node(&self) -> Option<&'g Node> {
        self.steps.first().map(|step| step.node)
    }

    /// Returns the node the route leads to.
    #[must_use]
    pub fn ending_node(&self) -> Option<&'g Node> {
        self.steps.last().map(|step| step.node)
    }
}

/// Renders the route as `A -[name (w)]-> B -> C`.
impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            if !step.is_first() {
                write!(f, "-> ")?;
            }
            write!(f, "{}", step.node.identifier())?;
            if let Some(edge) = step.edge {
                match edge.name() {
                    Some(name) => write!(f, " -[{} ({})] ", name, edge.weight())?,
                    None => write!(f, " -[{}] ", edge.weight())?,
                }
            }
        }
        Ok(())
    }
}
