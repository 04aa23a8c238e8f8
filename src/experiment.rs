use csv::Writer;
use decorum::R64;
use indicatif::ProgressBar;
use std::error::Error;
use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::experiment_config::{ExperimentConfig, ExperimentConfigError, GraphCreationConfig};
use crate::graph::generate::{Complete, Euclidean, Generate};
use crate::graph::{GraphError, WeightedGraph};
use crate::metaheuristic::aco::{AcoError, Supervisor};
use crate::metaheuristic::{Aco, BestTour, Metaheuristic};
use crate::rng::rng64;

/// Outcome of a single experiment.
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub best: BestTour,
    pub greedy_cost: R64,
    /// The graph with the pheromone levels after the last iteration.
    pub graph: WeightedGraph,
}

pub struct Experiment {}

impl Experiment {
    /// Runs the config and writes the statistics to the csv file at csv_path.
    /// Returns None without touching the file if the config is marked as finished.
    pub fn run_config<P: AsRef<Path>>(
        config: &ExperimentConfig,
        csv_path: P,
        progress: &ProgressBar,
    ) -> Result<Option<ExperimentResult>, ExperimentError> {
        if config.finished() {
            return Ok(None);
        }

        let writer = Writer::from_path(csv_path)?;
        Self::run_experiment(config, writer, progress).map(Some)
    }

    /// Builds the graph, runs all iterations and writes the aggregated statistics to writer.
    pub fn run_experiment<W: Write>(
        config: &ExperimentConfig,
        writer: Writer<W>,
        progress: &ProgressBar,
    ) -> Result<ExperimentResult, ExperimentError> {
        let experiment_cfg = config.experiment.cfg();
        let aco_cfg = config.algorithm.aco()?;
        let graph = Self::build_graph(&config.graph_creation)?;

        let supervisor = Supervisor::new(experiment_cfg.aggregation_rate, writer);
        let mut aco_algo = Aco::new(graph, aco_cfg.params(), supervisor)?;

        progress.set_length(aco_cfg.iterations as u64);
        while !aco_algo.finished() {
            aco_algo.single_iteration()?;
            progress.inc(1);
        }

        let graph = aco_algo.graph().clone();
        let greedy_cost = aco_algo.greedy_cost();
        let best = aco_algo.finalize();

        Ok(ExperimentResult {
            best,
            greedy_cost,
            graph,
        })
    }

    pub fn build_graph(config: &GraphCreationConfig) -> Result<WeightedGraph, ExperimentError> {
        let graph = match config {
            GraphCreationConfig::Explicit(_) => {
                let explicit = config.explicit()?;
                if explicit.symmetric {
                    WeightedGraph::symmetric_from_edges(explicit.order, &explicit.edges)?
                } else {
                    WeightedGraph::from_edges(explicit.order, &explicit.edges)?
                }
            }
            GraphCreationConfig::Complete(_) | GraphCreationConfig::UnseededComplete(_) => {
                let complete = config.complete()?;
                let mut rng = rng64(complete.seed as u128);
                let (low, high) = complete.cost_range;
                // low is at least 1, so this covers [low, high] even for high == u64::MAX
                let mut ew_gen = || (rng.rand_range(low - 1..high) + 1) as f64;
                if complete.symmetric {
                    Complete::symmetric(complete.size, &mut ew_gen).generate()?
                } else {
                    Complete::new(complete.size, &mut ew_gen).generate()?
                }
            }
            GraphCreationConfig::Euclidean(_) | GraphCreationConfig::UnseededEuclidean(_) => {
                let euclidean = config.euclidean()?;
                let mut rng = rng64(euclidean.seed as u128);
                Euclidean::new(euclidean.size, euclidean.side_length, &mut rng).generate()?
            }
        };

        Ok(graph)
    }
}

#[derive(Debug)]
pub enum ExperimentError {
    Config(ExperimentConfigError),
    Graph(GraphError),
    Aco(AcoError),
    Csv(csv::Error),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Invalid config: {}", err),
            Self::Graph(err) => write!(f, "Invalid graph: {}", err),
            Self::Aco(err) => write!(f, "Optimization failed: {}", err),
            Self::Csv(err) => write!(f, "Statistics could not be written: {}", err),
        }
    }
}

impl Error for ExperimentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Graph(err) => Some(err),
            Self::Aco(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<ExperimentConfigError> for ExperimentError {
    fn from(err: ExperimentConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<GraphError> for ExperimentError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

impl From<AcoError> for ExperimentError {
    fn from(err: AcoError) -> Self {
        Self::Aco(err)
    }
}

impl From<csv::Error> for ExperimentError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
