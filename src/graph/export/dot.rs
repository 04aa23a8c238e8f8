use super::Export;
use crate::graph::{Edge, WeightedGraph};
use crate::metaheuristic::Solution;

use std::collections::HashSet;

/// Empty struct. Only implements Export functionalities.
pub struct Dot {}

impl Dot {
    fn render(graph: &WeightedGraph, highlighted: &HashSet<Edge<usize>>, name: &str) -> String {
        let mut out = format!("digraph {} {{\n", name);

        for node in graph.iter_node_ids() {
            out.push_str(format!("\t{}\n", node).as_str());
        }

        for (edge, cost, pheromone) in graph.iter_edges() {
            let style = if highlighted.contains(&edge) {
                " color=red penwidth=3"
            } else {
                ""
            };
            out.push_str(
                format!(
                    "\t{} -> {} [label=\"{} / {:.4}\"{}]\n",
                    edge.0,
                    edge.1,
                    cost.into_inner(),
                    pheromone.into_inner(),
                    style
                )
                .as_str(),
            );
        }

        out.push('}');
        out
    }
}

impl Export for Dot {
    /// Returns a string representing the graph in Graphviz dot format.
    /// Every edge is labeled with its cost and pheromone level.
    fn from_weighted_graph(graph: &WeightedGraph, name: &str) -> String {
        Dot::render(graph, &HashSet::new(), name)
    }

    /// Same as from_weighted_graph, but the edges travelled by the tour are drawn red and bold.
    fn from_weighted_graph_with_tour(
        graph: &WeightedGraph,
        tour: &Solution<usize>,
        name: &str,
    ) -> String {
        let highlighted = tour.iter_cycle_edges().map(|(from, to)| (*from, *to)).collect();
        Dot::render(graph, &highlighted, name)
    }
}
