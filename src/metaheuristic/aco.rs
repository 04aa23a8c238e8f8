mod ant;
mod error;
mod message;
mod params;
mod supervisor;

pub use ant::{Ant, AntSolution};
pub use error::AcoError;
pub use message::{Message, CONSTRUCTION_PHASE, UPDATE_PHASE};
pub use params::{Params, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_RHO};
pub use supervisor::Supervisor;

use crate::graph::{GraphError, WeightedGraph};
use crate::metaheuristic::supervisor::Supervisor as _;
use crate::metaheuristic::{nearest_neighbor_tour, Metaheuristic, Solution};
use crate::rng::{derive_seed, rng64, shuffle};

use decorum::R64;
use oorandom::Rand64;
use std::collections::HashSet;
use std::io::Write;
use std::time::Instant;

/// The greedy tour used for seeding the pheromones always starts here.
const GREEDY_START: usize = 1;

/// The cheapest tour found and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTour {
    pub tour: Solution<usize>,
    pub cost: R64,
}

/// Ant colony optimization for the travelling salesman problem.
///
/// The colony owns the graph. While the ants construct their tours the graph is only borrowed
/// immutably, the pheromone update happens afterwards, once all tours of an iteration are known.
pub struct Aco<W: Write> {
    graph: WeightedGraph,
    params: Params,
    ants: Vec<Ant>,
    greedy_tour: Solution<usize>,
    greedy_cost: R64,
    iteration: usize,
    best_cost: Option<R64>,
    pub supervisor: Supervisor<W>,
}

impl<W: Write> Aco<W> {
    /// Validates the parameters, places the ants and seeds every edge with the pheromone level
    /// 1 / (order * greedy_cost), where greedy_cost is the cost of a nearest neighbor tour.
    pub fn new(
        mut graph: WeightedGraph,
        params: Params,
        mut supervisor: Supervisor<W>,
    ) -> Result<Self, AcoError> {
        validate(&graph, &params)?;

        let mut rng = rng64(params.seed);
        let start_cities = distribute_start_cities(&graph, params.ant_count, &mut rng);
        let (greedy_tour, greedy_cost) = nearest_neighbor_tour(&graph, GREEDY_START)?;
        let initial_pheromone = 1.0 / (graph.order() as f64 * greedy_cost.into_inner());
        if !initial_pheromone.is_finite() {
            return Err(GraphError::PheromoneOverflow.into());
        }
        graph.set_all_pheromones(R64::from_inner(initial_pheromone));

        let ants = start_cities
            .into_iter()
            .map(|start| {
                let (sender, id) = supervisor.new_ant();
                Ant::new(id, start, derive_seed(&mut rng), sender)
            })
            .collect();

        Ok(Aco {
            graph,
            params,
            ants,
            greedy_tour,
            greedy_cost,
            iteration: 0,
            best_cost: None,
            supervisor,
        })
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn greedy_tour(&self) -> &Solution<usize> {
        &self.greedy_tour
    }

    pub fn greedy_cost(&self) -> R64 {
        self.greedy_cost
    }

    /// Number of iterations done so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Runs all configured iterations and returns the best tour found.
    pub fn run(mut self) -> Result<BestTour, AcoError> {
        while !self.finished() {
            self.single_iteration()?;
        }

        Ok(self.finalize())
    }

    /// Ends the search, writes the collected statistics and returns the best tour.
    /// This is the best personal tour over all ants, unless the greedy seeding tour is cheaper.
    pub fn finalize(mut self) -> BestTour {
        self.supervisor.aggregate_receive();
        self.supervisor.write_records();

        let best_ant = self
            .ants
            .iter()
            .filter_map(|ant| ant.best_cost().map(|cost| (cost, ant)))
            .min_by_key(|(cost, _)| *cost);

        match best_ant {
            Some((cost, ant)) if cost <= self.greedy_cost => BestTour {
                tour: ant.best_tour().clone(),
                cost,
            },
            _ => BestTour {
                tour: self.greedy_tour,
                cost: self.greedy_cost,
            },
        }
    }

    /// Evaporates pheromone on every edge and deposits 1 / cost for every ant
    /// whose tour of this iteration uses the edge in either direction.
    /// If any new level is not finite, the pheromones are left untouched and an error is returned.
    fn pheromone_update(&mut self, solutions: &[AntSolution]) -> Result<(), GraphError> {
        let mut deposits = vec![0.0; self.graph.size()];
        for ant_solution in solutions {
            let deposit = 1.0 / ant_solution.cost.into_inner();
            let mut used = HashSet::new();
            for (&from, &to) in ant_solution.solution.iter_cycle_edges() {
                used.extend(self.graph.edge_slot((from, to)));
                used.extend(self.graph.edge_slot((to, from)));
            }
            for slot in used {
                deposits[slot] += deposit;
            }
        }

        let retention = 1.0 - self.params.rho;
        let updated: Vec<f64> = self
            .graph
            .iter_edges()
            .zip(deposits)
            .map(|((_, _, pheromone), deposit)| retention * pheromone.into_inner() + deposit)
            .collect();
        if updated.iter().any(|level| !level.is_finite()) {
            return Err(GraphError::PheromoneOverflow);
        }

        for (pheromone, level) in self.graph.pheromones_mut().iter_mut().zip(updated) {
            *pheromone = R64::from_inner(level);
        }

        Ok(())
    }
}

impl<W: Write> Metaheuristic for Aco<W> {
    type Error = AcoError;

    fn single_iteration(&mut self) -> Result<Option<&Solution<usize>>, AcoError> {
        let alpha = self.params.alpha;
        let beta = self.params.beta;

        let mut solutions = Vec::with_capacity(self.ants.len());
        for ant in self.ants.iter_mut() {
            solutions.push(ant.get_solution(&self.graph, alpha, beta, self.iteration)?);
        }

        let start_time = Instant::now();
        self.pheromone_update(&solutions)?;

        let best_ant = self
            .ants
            .iter()
            .enumerate()
            .filter_map(|(i, ant)| ant.best_cost().map(|cost| (cost, i)))
            .min();
        let improved = match (best_ant, self.best_cost) {
            (Some((cost, _)), Some(best)) => cost < best,
            (Some(_), None) => true,
            _ => false,
        };

        let _res = self.supervisor.sender().send(Message::new(
            0,
            self.iteration,
            0,
            improved as usize,
            self.graph.size(),
            UPDATE_PHASE,
            start_time.elapsed(),
            None,
        )); // Ant 0 is always the colony
        self.supervisor.aggregate_receive();
        self.iteration += 1;

        match best_ant {
            Some((cost, i)) if improved => {
                self.best_cost = Some(cost);
                Ok(Some(self.ants[i].best_tour()))
            }
            _ => Ok(None),
        }
    }

    fn finished(&self) -> bool {
        self.iteration >= self.params.iterations
    }
}

fn validate(graph: &WeightedGraph, params: &Params) -> Result<(), AcoError> {
    if params.ant_count == 0 {
        return Err(AcoError::InvalidAntCount(params.ant_count));
    }
    if params.iterations == 0 {
        return Err(AcoError::InvalidIterationCount(params.iterations));
    }
    if graph.order() < 2 {
        return Err(AcoError::TooFewNodes(graph.order()));
    }
    if !(0.0..=1.0).contains(&params.rho) {
        return Err(AcoError::InvalidEvaporationRate(params.rho));
    }
    for &exponent in [params.alpha, params.beta].iter() {
        if !exponent.is_finite() || exponent < 0.0 {
            return Err(AcoError::InvalidExponent(exponent));
        }
    }
    for id in graph.iter_node_ids() {
        if graph.degree(id)? == 0 {
            return Err(AcoError::IsolatedNode(id));
        }
    }

    Ok(())
}

/// Hands out the cities of a shuffled permutation one by one and reshuffles once all are taken,
/// so no city gets a second ant before every city got one.
fn distribute_start_cities(graph: &WeightedGraph, ant_count: usize, rng: &mut Rand64) -> Vec<usize> {
    let mut start_cities = Vec::with_capacity(ant_count);
    while start_cities.len() < ant_count {
        let mut cities = graph.node_ids();
        shuffle(rng, &mut cities);
        let take = (ant_count - start_cities.len()).min(cities.len());
        start_cities.extend_from_slice(&cities[..take]);
    }

    start_cities
}
