mod aco_experiment;

use serde::{Deserialize, Serialize};

use crate::experiment_config::{ExperimentConfigError, Fix};
pub use aco_experiment::{AcoExperiment, UnseededAcoExperiment};

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum AlgoConfig {
    Aco(AcoExperiment),
    UnseededAco(UnseededAcoExperiment),
}

impl AlgoConfig {
    /// Returns the validated config with a fixed seed.
    /// Unseeded configs draw a new seed from the OS on every call.
    pub fn aco(&self) -> Result<AcoExperiment, ExperimentConfigError> {
        let aco = match self {
            AlgoConfig::Aco(aco) => *aco,
            AlgoConfig::UnseededAco(usaco) => usaco.to_fixed(),
        };
        aco.validate()?;

        Ok(aco)
    }
}
