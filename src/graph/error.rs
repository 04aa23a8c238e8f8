use crate::graph::Edge;

use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum GraphError {
    MissingEdge(Edge<usize>),
    MissingNode(usize),
    InvalidCost(Edge<usize>, f64),
    InvalidPheromone(Edge<usize>, f64),
    /// No unvisited node is reachable from the given node.
    DeadEnd(usize),
    /// A sum of edge costs is too large to be represented.
    CostOverflow,
    /// A pheromone level computed from the costs is too large to be represented.
    PheromoneOverflow,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEdge((from, to)) => write!(f, "Edge {} -> {} is not in the graph.", from, to),
            Self::MissingNode(id) => write!(f, "Node {} is not in the graph.", id),
            Self::InvalidCost((from, to), cost) => write!(
                f,
                "Edge {} -> {} needs a positive finite cost, got {}.",
                from, to, cost
            ),
            Self::InvalidPheromone((from, to), value) => write!(
                f,
                "Edge {} -> {} needs a non-negative finite pheromone level, got {}.",
                from, to, value
            ),
            Self::DeadEnd(id) => write!(f, "No unvisited node is reachable from node {}.", id),
            Self::CostOverflow => write!(f, "Sum of edge costs is not finite."),
            Self::PheromoneOverflow => write!(f, "Pheromone level is not finite."),
        }
    }
}

impl Error for GraphError {}
