use crate::graph::GraphError;

use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum AcoError {
    InvalidAntCount(usize),
    InvalidIterationCount(usize),
    InvalidEvaporationRate(f64),
    InvalidExponent(f64),
    TooFewNodes(usize),
    /// The node has no outgoing edges, so no tour can leave it.
    IsolatedNode(usize),
    Graph(GraphError),
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAntCount(count) => write!(f, "At least one ant is needed, got {}.", count),
            Self::InvalidIterationCount(count) => {
                write!(f, "At least one iteration is needed, got {}.", count)
            }
            Self::InvalidEvaporationRate(rho) => {
                write!(f, "Evaporation rate must be in [0, 1], got {}.", rho)
            }
            Self::InvalidExponent(exponent) => write!(
                f,
                "Pheromone and heuristic exponents must be finite and non-negative, got {}.",
                exponent
            ),
            Self::TooFewNodes(order) => {
                write!(f, "A tour needs at least two nodes, graph has {}.", order)
            }
            Self::IsolatedNode(id) => write!(f, "Node {} has no outgoing edges.", id),
            Self::Graph(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AcoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphError> for AcoError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}
