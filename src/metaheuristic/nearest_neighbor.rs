use crate::graph::{GraphError, WeightedGraph};
use crate::metaheuristic::{solution_length, Solution};

use decorum::R64;

/// Builds a tour by always travelling to the cheapest unvisited neighbor,
/// starting at the given node. Ties go to the neighbor with the lowest id.
/// Returns the tour together with its cost as a closed cycle.
pub fn nearest_neighbor_tour(
    graph: &WeightedGraph,
    start: usize,
) -> Result<(Solution<usize>, R64), GraphError> {
    if !graph.has_node(start) {
        return Err(GraphError::MissingNode(start));
    }

    let mut visited = vec![false; graph.order() + 1];
    let mut solution = Solution::with_capacity(graph.order());
    let mut current = start;
    visited[current] = true;
    solution.push_node(current);

    while solution.len() < graph.order() {
        let mut cheapest: Option<(R64, usize)> = None;
        for &id in graph.neighbor_ids(current)? {
            if visited[id] {
                continue;
            }

            let cost = graph.edge_cost((current, id))?;
            cheapest = match cheapest {
                Some(best) if best <= (cost, id) => Some(best),
                _ => Some((cost, id)),
            };
        }

        match cheapest {
            Some((_, id)) => {
                visited[id] = true;
                solution.push_node(id);
                current = id;
            }
            None => return Err(GraphError::DeadEnd(current)),
        }
    }

    let cost = solution_length(&solution, graph)?;
    Ok((solution, cost))
}
