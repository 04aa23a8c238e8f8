use crate::graph::{GraphError, WeightedGraph};
use crate::metaheuristic::aco::message::CONSTRUCTION_PHASE;
use crate::metaheuristic::aco::Message;
use crate::metaheuristic::{solution_length, Solution};
use crate::rng::rng64;

use decorum::R64;
use oorandom::Rand64;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// An ant keeps its position and its best tour between iterations.
/// The graph is only borrowed while a tour is constructed.
pub struct Ant {
    id: usize,
    current_city: usize,
    rng: Rand64,
    best_tour: Solution<usize>,
    best_cost: Option<R64>,
    sender: Sender<Message>,
}

#[derive(Debug, Clone)]
pub struct AntSolution {
    pub solution: Solution<usize>,
    pub cost: R64,
    pub evaluations: usize,
    pub improved: bool,
}

impl Ant {
    pub fn new(id: usize, start_city: usize, rng_seed: u128, sender: Sender<Message>) -> Self {
        Ant {
            id,
            current_city: start_city,
            rng: rng64(rng_seed),
            best_tour: Solution::new(),
            best_cost: None,
            sender,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_city(&self) -> usize {
        self.current_city
    }

    pub fn best_tour(&self) -> &Solution<usize> {
        &self.best_tour
    }

    /// None until the ant completed its first tour.
    pub fn best_cost(&self) -> Option<R64> {
        self.best_cost
    }

    /// Constructs a tour starting at the current city and records it as personal best if it improves.
    /// Afterwards the ant stays at the last city of the tour.
    pub fn get_solution(
        &mut self,
        graph: &WeightedGraph,
        alpha: f64,
        beta: f64,
        iteration: usize,
    ) -> Result<AntSolution, GraphError> {
        let start_time = Instant::now();
        let mut evals = 0;
        let mut visited = vec![false; graph.order() + 1];
        let mut solution = Solution::with_capacity(graph.order());
        let mut current = self.current_city;
        visited[current] = true;
        solution.push_node(current);

        while solution.len() < graph.order() {
            let mut candidates: Vec<usize> = graph
                .neighbor_ids(current)?
                .iter()
                .copied()
                .filter(|&id| !visited[id])
                .collect();
            candidates.sort_unstable();
            candidates.dedup();
            if candidates.is_empty() {
                return Err(GraphError::DeadEnd(current));
            }

            evals += candidates.len();
            current = self.select_next(graph, current, &candidates, alpha, beta)?;
            visited[current] = true;
            solution.push_node(current);
        }

        let cost = solution_length(&solution, graph)?;
        let improved = self.record(&solution, cost);
        self.current_city = current;

        let _res = self.sender.send(Message::new(
            self.id,
            iteration,
            evals,
            improved as usize,
            solution.len() - 1,
            CONSTRUCTION_PHASE,
            start_time.elapsed(),
            Some(cost.into_inner()),
        ));

        Ok(AntSolution {
            solution,
            cost,
            evaluations: evals,
            improved,
        })
    }

    /// Picks the candidate with the highest probability pheromone^alpha * (1 / cost)^beta,
    /// normalized over all candidates. The candidates have to be sorted, so ties go to the lowest id.
    /// If the weights sum up to zero or overflow, a candidate is drawn uniformly instead.
    fn select_next(
        &mut self,
        graph: &WeightedGraph,
        from: usize,
        candidates: &[usize],
        alpha: f64,
        beta: f64,
    ) -> Result<usize, GraphError> {
        let mut weights = Vec::with_capacity(candidates.len());
        for &to in candidates {
            let pheromone = graph.edge_pheromone((from, to))?.into_inner();
            let cost = graph.edge_cost((from, to))?.into_inner();
            weights.push(pheromone.powf(alpha) * (1.0 / cost).powf(beta));
        }

        let weight_sum: f64 = weights.iter().sum();
        if !weight_sum.is_finite() || weight_sum <= 0.0 {
            let idx = self.rng.rand_range(0..candidates.len() as u64) as usize;
            return Ok(candidates[idx]);
        }

        candidates
            .iter()
            .zip(weights.iter())
            .map(|(&id, &weight)| (R64::from_inner(weight / weight_sum), id))
            .fold(None, |best, (probability, id)| match best {
                Some((best_probability, _)) if best_probability >= probability => best,
                _ => Some((probability, id)),
            })
            .map(|(_, id)| id)
            .ok_or(GraphError::DeadEnd(from))
    }

    /// Keeps the solution if it is strictly cheaper than the best one so far.
    pub(super) fn record(&mut self, solution: &Solution<usize>, cost: R64) -> bool {
        match self.best_cost {
            Some(best) if best <= cost => false,
            _ => {
                self.best_cost = Some(cost);
                self.best_tour = solution.clone();
                true
            }
        }
    }
}
