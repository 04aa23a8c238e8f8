use crate::graph::{Edge, GraphError};

use decorum::R64;
use num_traits::Zero;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Implements a weighted, directed graph over the nodes 1..=order.
/// Every edge carries a travel cost and a mutable pheromone level.
/// Edges are stored in an arena, the pheromone levels in a vector parallel to it,
/// so edges can be addressed by their (from_id, to_id) pair or by slot.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    order: usize,
    edge_map: HashMap<Edge<usize>, usize>,
    edges: Vec<(Edge<usize>, R64)>,
    pheromones: Vec<R64>,
    adjacency: Vec<Vec<usize>>,
}

impl WeightedGraph {
    /// Constructs a graph with the nodes 1..=order and no edges.
    pub fn with_order(order: usize) -> Self {
        WeightedGraph {
            order,
            edge_map: HashMap::new(),
            edges: Vec::new(),
            pheromones: Vec::new(),
            adjacency: vec![Vec::new(); order],
        }
    }

    /// Constructs a graph from a list of directed, weighted edges (from, to, cost).
    pub fn from_edges(order: usize, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let mut graph = WeightedGraph::with_order(order);
        for &(from, to, cost) in edges {
            graph.add_edge((from, to), cost)?;
        }

        Ok(graph)
    }

    /// Like from_edges, but every edge is inserted in both directions with the same cost.
    pub fn symmetric_from_edges(
        order: usize,
        edges: &[(usize, usize, f64)],
    ) -> Result<Self, GraphError> {
        let mut graph = WeightedGraph::with_order(order);
        for &(from, to, cost) in edges {
            graph.add_edge((from, to), cost)?;
            graph.add_edge((to, from), cost)?;
        }

        Ok(graph)
    }

    /// Returns true if there are no nodes, or false otherwise.
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns the number of nodes in this graph.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of edges in this graph.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, id: usize) -> bool {
        id >= 1 && id <= self.order
    }

    pub fn iter_node_ids(&self) -> RangeInclusive<usize> {
        1..=self.order
    }

    pub fn node_ids(&self) -> Vec<usize> {
        self.iter_node_ids().collect()
    }

    /// Returns the destinations reachable from the node in edge insertion order.
    /// Returns an error if the node is not in the graph.
    pub fn neighbor_ids(&self, id: usize) -> Result<&[usize], GraphError> {
        if !self.has_node(id) {
            return Err(GraphError::MissingNode(id));
        }

        Ok(&self.adjacency[id - 1])
    }

    /// Returns the count of outgoing adjacency entries at the node.
    pub fn degree(&self, id: usize) -> Result<usize, GraphError> {
        self.neighbor_ids(id).map(|neighbors| neighbors.len())
    }

    pub fn has_edge(&self, edge: Edge<usize>) -> bool {
        self.edge_map.contains_key(&edge)
    }

    /// Adds a weighted edge to the graph.
    /// An existing edge between the same nodes is overwritten and loses its pheromone.
    /// The destination is appended to the adjacency of the origin in any case.
    pub fn add_edge(&mut self, edge: Edge<usize>, cost: f64) -> Result<(), GraphError> {
        let (from, to) = edge;
        if !self.has_node(from) {
            return Err(GraphError::MissingNode(from));
        } else if !self.has_node(to) {
            return Err(GraphError::MissingNode(to));
        } else if !cost.is_finite() || cost <= 0.0 {
            return Err(GraphError::InvalidCost(edge, cost));
        }

        let cost = R64::from_inner(cost);
        if let Some(&slot) = self.edge_map.get(&edge) {
            self.edges[slot].1 = cost;
            self.pheromones[slot] = R64::zero();
        } else {
            self.edge_map.insert(edge, self.edges.len());
            self.edges.push((edge, cost));
            self.pheromones.push(R64::zero());
        }
        self.adjacency[from - 1].push(to);

        Ok(())
    }

    pub fn edge_cost(&self, edge: Edge<usize>) -> Result<R64, GraphError> {
        self.slot(edge).map(|slot| self.edges[slot].1)
    }

    pub fn edge_pheromone(&self, edge: Edge<usize>) -> Result<R64, GraphError> {
        self.slot(edge).map(|slot| self.pheromones[slot])
    }

    pub fn set_edge_pheromone(&mut self, edge: Edge<usize>, value: f64) -> Result<(), GraphError> {
        let slot = self.slot(edge)?;
        if !value.is_finite() || value < 0.0 {
            return Err(GraphError::InvalidPheromone(edge, value));
        }
        self.pheromones[slot] = R64::from_inner(value);

        Ok(())
    }

    pub fn set_all_pheromones(&mut self, value: R64) {
        for pheromone in self.pheromones.iter_mut() {
            *pheromone = value;
        }
    }

    /// Returns an iterator over all edges with their cost and pheromone level.
    pub fn iter_edges(&self) -> impl Iterator<Item = (Edge<usize>, R64, R64)> + '_ {
        self.edges
            .iter()
            .zip(self.pheromones.iter())
            .map(|(&(edge, cost), &pheromone)| (edge, cost, pheromone))
    }

    /// Sums the edge costs along the path, treating it as a cycle.
    /// This means the edge from the last node back to the first one is included.
    /// Errors with CostOverflow if the sum is not finite.
    pub fn path_cost(&self, path: &[usize]) -> Result<R64, GraphError> {
        let mut cost = 0.0;
        for (from, to) in path.iter().zip(path.iter().cycle().skip(1)) {
            cost += self.edge_cost((*from, *to))?.into_inner();
        }

        if !cost.is_finite() {
            return Err(GraphError::CostOverflow);
        }
        Ok(R64::from_inner(cost))
    }

    pub(crate) fn edge_slot(&self, edge: Edge<usize>) -> Option<usize> {
        self.edge_map.get(&edge).copied()
    }

    pub(crate) fn pheromones_mut(&mut self) -> &mut [R64] {
        &mut self.pheromones
    }

    fn slot(&self, edge: Edge<usize>) -> Result<usize, GraphError> {
        self.edge_slot(edge).ok_or(GraphError::MissingEdge(edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn triangle() -> WeightedGraph {
        WeightedGraph::symmetric_from_edges(3, &[(1, 2, 1.0), (2, 3, 2.0), (1, 3, 4.0)]).unwrap()
    }

    fn asymmetric_square() -> WeightedGraph {
        WeightedGraph::from_edges(
            4,
            &[
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
                (4, 1, 1.0),
                (2, 1, 5.0),
                (3, 2, 5.0),
                (4, 3, 5.0),
                (1, 4, 5.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn with_order_works() {
        let graph = WeightedGraph::with_order(4);

        assert_eq!(graph.order(), 4, "Graph should have four nodes.");
        assert_eq!(graph.size(), 0, "Graph should not have any edges yet.");
        assert_eq!(graph.node_ids(), vec![1, 2, 3, 4]);
        assert!(!graph.is_empty());
        assert!(WeightedGraph::with_order(0).is_empty());
    }

    #[test]
    fn add_edge_works() {
        let mut graph = WeightedGraph::with_order(3);
        graph.add_edge((1, 2), 3.5).unwrap();

        assert!(graph.has_edge((1, 2)), "Edge should have been added.");
        assert!(!graph.has_edge((2, 1)), "Edges are directed.");
        assert_eq!(graph.edge_cost((1, 2)).unwrap().into_inner(), 3.5);
        assert_eq!(graph.edge_pheromone((1, 2)).unwrap().into_inner(), 0.0);
        assert_eq!(graph.neighbor_ids(1).unwrap(), &[2]);
    }

    #[test]
    fn add_edge_overwrites_duplicates() {
        let mut graph = WeightedGraph::with_order(2);
        graph.add_edge((1, 2), 3.0).unwrap();
        graph.set_edge_pheromone((1, 2), 0.7).unwrap();
        graph.add_edge((1, 2), 6.0).unwrap();

        assert_eq!(graph.size(), 1, "Duplicate edge should not be counted twice.");
        assert_eq!(graph.edge_cost((1, 2)).unwrap().into_inner(), 6.0);
        assert_eq!(graph.edge_pheromone((1, 2)).unwrap().into_inner(), 0.0);
        assert_eq!(
            graph.neighbor_ids(1).unwrap(),
            &[2, 2],
            "Adjacency keeps duplicate entries."
        );
    }

    #[test]
    fn add_edge_with_missing_node_errors() {
        let mut graph = WeightedGraph::with_order(2);

        assert_eq!(graph.add_edge((0, 1), 1.0), Err(GraphError::MissingNode(0)));
        assert_eq!(graph.add_edge((1, 3), 1.0), Err(GraphError::MissingNode(3)));
    }

    #[test]
    fn add_edge_with_invalid_cost_errors() {
        let mut graph = WeightedGraph::with_order(2);

        assert_eq!(
            graph.add_edge((1, 2), 0.0),
            Err(GraphError::InvalidCost((1, 2), 0.0))
        );
        assert_eq!(
            graph.add_edge((1, 2), -2.0),
            Err(GraphError::InvalidCost((1, 2), -2.0))
        );
        assert!(graph.add_edge((1, 2), f64::NAN).is_err());
        assert!(graph.add_edge((1, 2), f64::INFINITY).is_err());
        assert_eq!(graph.size(), 0, "No invalid edge should have been added.");
    }

    #[test]
    fn lookups_on_missing_edge_error() {
        let mut graph = WeightedGraph::with_order(3);
        graph.add_edge((1, 2), 1.0).unwrap();

        assert_eq!(graph.edge_cost((2, 1)), Err(GraphError::MissingEdge((2, 1))));
        assert_eq!(
            graph.edge_pheromone((3, 1)),
            Err(GraphError::MissingEdge((3, 1)))
        );
        assert_eq!(
            graph.set_edge_pheromone((2, 3), 1.0),
            Err(GraphError::MissingEdge((2, 3)))
        );
    }

    #[test]
    fn set_edge_pheromone_works() {
        let mut graph = triangle();
        graph.set_edge_pheromone((2, 3), 0.25).unwrap();

        assert_eq!(graph.edge_pheromone((2, 3)).unwrap().into_inner(), 0.25);
        assert_eq!(
            graph.edge_pheromone((3, 2)).unwrap().into_inner(),
            0.0,
            "Reverse edge has its own pheromone level."
        );
        assert_eq!(
            graph.set_edge_pheromone((2, 3), -1.0),
            Err(GraphError::InvalidPheromone((2, 3), -1.0))
        );
    }

    #[test]
    fn set_all_pheromones_works() {
        let mut graph = triangle();
        graph.set_all_pheromones(R64::from_inner(0.5));

        for (_, _, pheromone) in graph.iter_edges() {
            assert_eq!(pheromone.into_inner(), 0.5);
        }
    }

    #[test]
    fn neighbor_ids_of_missing_node_errors() {
        let graph = triangle();

        assert_eq!(graph.neighbor_ids(4), Err(GraphError::MissingNode(4)));
        assert_eq!(graph.degree(0), Err(GraphError::MissingNode(0)));
        assert_eq!(graph.degree(2), Ok(2));
    }

    #[test]
    fn path_cost_closes_the_cycle() {
        let graph = triangle();

        assert!(approx_eq!(
            f64,
            graph.path_cost(&[1, 2, 3]).unwrap().into_inner(),
            7.0
        ));
        assert_eq!(graph.path_cost(&[]).unwrap().into_inner(), 0.0);
    }

    #[test]
    fn path_cost_is_rotation_invariant() {
        let graph = asymmetric_square();
        let cost = graph.path_cost(&[1, 2, 3, 4]).unwrap();

        assert_eq!(graph.path_cost(&[2, 3, 4, 1]).unwrap(), cost);
        assert_eq!(graph.path_cost(&[4, 1, 2, 3]).unwrap(), cost);
        assert_eq!(
            graph.path_cost(&[4, 3, 2, 1]).unwrap().into_inner(),
            20.0,
            "Reversal changes the cost on asymmetric graphs."
        );
    }

    #[test]
    fn path_cost_with_missing_edge_errors() {
        let graph = WeightedGraph::from_edges(3, &[(1, 2, 1.0), (2, 3, 1.0)]).unwrap();

        assert_eq!(
            graph.path_cost(&[1, 2, 3]),
            Err(GraphError::MissingEdge((3, 1))),
            "The wrap around edge is missing."
        );
    }

    #[test]
    fn path_cost_overflow_errors() {
        let graph = WeightedGraph::symmetric_from_edges(2, &[(1, 2, 1e308)]).unwrap();

        assert_eq!(graph.path_cost(&[1, 2]), Err(GraphError::CostOverflow));
        assert_eq!(graph.path_cost(&[1]).unwrap_err(), GraphError::MissingEdge((1, 1)));
        assert_eq!(
            graph.edge_cost((1, 2)).unwrap().into_inner(),
            1e308,
            "Large costs on their own are valid."
        );
    }

    #[test]
    fn iter_edges_keeps_insertion_order() {
        let graph = WeightedGraph::from_edges(3, &[(2, 3, 1.0), (1, 2, 2.0)]).unwrap();
        let edges: Vec<Edge<usize>> = graph.iter_edges().map(|(edge, _, _)| edge).collect();

        assert_eq!(edges, vec![(2, 3), (1, 2)]);
        assert_eq!(graph.edge_slot((1, 2)), Some(1));
        assert_eq!(graph.edge_slot((3, 1)), None);
    }
}
