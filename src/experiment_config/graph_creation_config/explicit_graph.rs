use serde::{Deserialize, Serialize};

/// A graph given edge by edge as (from, to, cost).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ExplicitGraph {
    pub order: usize,
    #[serde(default)]
    pub symmetric: bool,
    pub edges: Vec<(usize, usize, f64)>,
}
