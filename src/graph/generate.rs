mod complete;
mod euclidean;

pub use complete::{complete_with_random_costs, Complete};
pub use euclidean::Euclidean;

use crate::graph::{GraphError, WeightedGraph};

/// A Generator for weighted graphs.
pub trait Generate {
    /// Generates a weighted graph.
    /// Returns an error if one of the generated edge costs is not valid.
    fn generate(&mut self) -> Result<WeightedGraph, GraphError>;
}
