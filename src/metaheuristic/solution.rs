use crate::graph::{Edge, GraphError, WeightedGraph};

use decorum::R64;
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

/// Returns the cost of the solution, travelled as a closed cycle.
pub fn solution_length(
    solution: &Solution<usize>,
    graph: &WeightedGraph,
) -> Result<R64, GraphError> {
    graph.path_cost(&solution.node_list)
}

/// A tour through the graph, given by the order its nodes are visited in.
/// The tour is interpreted as a cycle, so the last node connects back to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<IndexType> {
    node_list: Vec<IndexType>,
}

impl<IndexType> Default for Solution<IndexType>
where
    IndexType: PartialEq + Copy,
{
    fn default() -> Self {
        Solution::new()
    }
}

impl<IndexType> Solution<IndexType>
where
    IndexType: PartialEq + Copy,
{
    pub fn new() -> Self {
        Solution {
            node_list: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Solution {
            node_list: Vec::with_capacity(capacity),
        }
    }

    pub fn from_nodes(nodes: Vec<IndexType>) -> Self {
        Solution { node_list: nodes }
    }

    pub fn push_node(&mut self, node: IndexType) {
        self.node_list.push(node);
    }

    pub fn len(&self) -> usize {
        self.node_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_list.is_empty()
    }

    pub fn first(&self) -> Option<IndexType> {
        self.node_list.first().copied()
    }

    pub fn last(&self) -> Option<IndexType> {
        self.node_list.last().copied()
    }

    /// Iterates the edges between consecutive nodes, without the closing edge.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<&IndexType>> + '_> {
        Box::new(self.node_list.iter().zip(self.node_list.iter().skip(1)))
    }

    /// Iterates the edges of the cycle, including the one from the last node back to the first.
    pub fn iter_cycle_edges(&self) -> Box<dyn Iterator<Item = Edge<&IndexType>> + '_> {
        Box::new(
            self.node_list
                .iter()
                .zip(self.node_list.iter().cycle().skip(1)),
        )
    }

    pub fn iter_nodes(&self) -> Box<dyn Iterator<Item = &IndexType> + '_> {
        Box::new(self.node_list.iter())
    }

    pub fn edges(&self) -> Vec<Edge<IndexType>> {
        self.iter_edges().map(|x| (*x.0, *x.1)).collect()
    }

    pub fn cycle_edges(&self) -> Vec<Edge<IndexType>> {
        self.iter_cycle_edges().map(|x| (*x.0, *x.1)).collect()
    }

    pub fn nodes(&self) -> Vec<IndexType> {
        self.node_list.clone()
    }

    pub fn as_slice(&self) -> &[IndexType] {
        &self.node_list
    }
}

impl<IndexType> Solution<IndexType>
where
    IndexType: Eq + Hash + Copy,
{
    /// Returns true if every given node is visited exactly once and no other node is visited.
    pub fn is_permutation_of(&self, nodes: impl IntoIterator<Item = IndexType>) -> bool {
        let expected: HashSet<IndexType> = nodes.into_iter().collect();
        let mut seen = HashSet::with_capacity(self.node_list.len());

        self.node_list.len() == expected.len()
            && self
                .node_list
                .iter()
                .all(|id| expected.contains(id) && seen.insert(*id))
    }
}

impl<IndexType: Display> Display for Solution<IndexType> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.node_list
                .iter()
                .map(|x| format!("{}", x))
                .collect::<Vec<String>>()
                .join(" -> ")
        )
    }
}
