use super::Generate;
use crate::graph::{GraphError, WeightedGraph};

use oorandom::Rand64;

/// Generates a complete graph, meaning every node has an edge to every other node.
pub struct Complete<'a> {
    size: usize,
    symmetric: bool,
    ew_generator: &'a mut dyn FnMut() -> f64,
}

impl<'a> Complete<'a> {
    /// Every ordered pair of nodes gets its own cost.
    pub fn new(size: usize, ew_generator: &'a mut dyn FnMut() -> f64) -> Complete<'a> {
        Complete {
            size,
            symmetric: false,
            ew_generator,
        }
    }

    /// Both directions between two nodes share the same cost.
    pub fn symmetric(size: usize, ew_generator: &'a mut dyn FnMut() -> f64) -> Complete<'a> {
        Complete {
            size,
            symmetric: true,
            ew_generator,
        }
    }
}

impl<'a> Generate for Complete<'a> {
    fn generate(&mut self) -> Result<WeightedGraph, GraphError> {
        let mut graph = WeightedGraph::with_order(self.size);

        for i in 1..=self.size {
            for j in 1..=self.size {
                if i == j || (self.symmetric && j < i) {
                    continue;
                }

                let cost = (self.ew_generator)();
                graph.add_edge((i, j), cost)?;
                if self.symmetric {
                    graph.add_edge((j, i), cost)?;
                }
            }
        }

        Ok(graph)
    }
}

/// Builds a complete graph with integer costs drawn uniformly from [1, 10] for every ordered pair.
pub fn complete_with_random_costs(
    size: usize,
    rng: &mut Rand64,
) -> Result<WeightedGraph, GraphError> {
    let mut ew_gen = || rng.rand_range(1..11) as f64;
    Complete::new(size, &mut ew_gen).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{preseeded_rng64, rng64};

    #[test]
    fn constant_weighted_works() {
        let mut edge_gen = || 2.0;
        let graph = Complete::new(5, &mut edge_gen).generate().unwrap();

        assert_eq!(graph.order(), 5);
        assert_eq!(
            graph.size(),
            20,
            "A complete directed graph with 5 nodes should have 20 edges."
        );
        for (_, cost, _) in graph.iter_edges() {
            assert_eq!(
                cost.into_inner(),
                2.0,
                "All costs should have been initialized with the value 2.0."
            );
        }
        for id in graph.iter_node_ids() {
            assert_eq!(graph.degree(id).unwrap(), 4);
            assert!(!graph.has_edge((id, id)), "There should be no self loops.");
        }
    }

    #[test]
    fn symmetric_works() {
        let mut rng = preseeded_rng64();
        let mut edge_gen = || rng.rand_float() + 1.0;
        let graph = Complete::symmetric(6, &mut edge_gen).generate().unwrap();

        assert_eq!(graph.size(), 30);
        for ((from, to), cost, _) in graph.iter_edges() {
            assert_eq!(graph.edge_cost((to, from)).unwrap(), cost);
        }
    }

    #[test]
    fn random_costs_are_in_range() {
        let mut rng = preseeded_rng64();
        let graph = complete_with_random_costs(8, &mut rng).unwrap();

        assert_eq!(graph.size(), 56);
        for (_, cost, _) in graph.iter_edges() {
            let cost = cost.into_inner();
            assert!(cost >= 1.0 && cost <= 10.0, "Cost {} out of range.", cost);
            assert_eq!(cost.fract(), 0.0, "Costs should be integers.");
        }
    }

    #[test]
    fn random_costs_are_reproducible() {
        let first = complete_with_random_costs(6, &mut rng64(9)).unwrap();
        let second = complete_with_random_costs(6, &mut rng64(9)).unwrap();

        assert!(first.iter_edges().eq(second.iter_edges()));
    }

    #[test]
    fn invalid_generated_cost_errors() {
        let mut edge_gen = || 0.0;

        assert_eq!(
            Complete::new(3, &mut edge_gen).generate().err(),
            Some(GraphError::InvalidCost((1, 2), 0.0))
        );
    }
}
