mod error;
pub mod export;
pub mod generate;
mod weighted_graph;

pub use error::GraphError;
pub use weighted_graph::WeightedGraph;

/// A directed edge in the form (from_id, to_id).
pub type Edge<IndexType> = (IndexType, IndexType);
