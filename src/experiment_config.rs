mod algo_config;
mod general_experiment_config;
mod graph_creation_config;

pub use algo_config::{AcoExperiment, AlgoConfig, UnseededAcoExperiment};
pub use general_experiment_config::{AggregationOnly, FullConfig, GeneralExperimentConfig};
pub use graph_creation_config::{
    CompleteGeneration, EuclideanGeneration, ExplicitGraph, GraphCreationConfig,
    UnseededCompleteGeneration, UnseededEuclideanGeneration,
};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

pub trait Algorithm {
    fn finished(&self) -> bool;
}

/// Turns a config with missing values, usually a missing seed, into a complete one.
pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ExperimentConfig {
    pub experiment: GeneralExperimentConfig,
    pub algorithm: AlgoConfig,
    pub graph_creation: GraphCreationConfig,
}

impl ExperimentConfig {
    /// Loads a config file. Files ending in `.ron` are read as RON, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExperimentConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| ExperimentConfigError::Io(format!("{}: {}", path.display(), err)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ExperimentConfigError> {
        serde_yaml::from_str(content).map_err(|err| ExperimentConfigError::Parse(err.to_string()))
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ExperimentConfigError> {
        ron::de::from_str(content).map_err(|err| ExperimentConfigError::Parse(err.to_string()))
    }

    pub fn finished(&self) -> bool {
        self.experiment.cfg().finished()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentConfigError {
    Io(String),
    Parse(String),
    InvalidAlgorithmConfig(String),
    InvalidGraphConfig(String),
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Config could not be read: {}", msg),
            Self::Parse(msg) => write!(f, "Config could not be parsed: {}", msg),
            Self::InvalidAlgorithmConfig(msg) => write!(f, "{}", msg),
            Self::InvalidGraphConfig(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ExperimentConfigError {}
