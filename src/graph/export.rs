mod dot;

pub use dot::Dot;

use crate::graph::WeightedGraph;
use crate::metaheuristic::Solution;

/// An exporter for weighted graphs.
pub trait Export {
    /// Returns a String representation of the graph according to the export format used.
    fn from_weighted_graph(graph: &WeightedGraph, name: &str) -> String;

    /// Returns a String representation of the graph with the edges of the tour highlighted.
    fn from_weighted_graph_with_tour(
        graph: &WeightedGraph,
        tour: &Solution<usize>,
        name: &str,
    ) -> String;
}
