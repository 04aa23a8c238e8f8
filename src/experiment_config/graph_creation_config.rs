mod complete_generation;
mod euclidean_generation;
mod explicit_graph;

pub use complete_generation::{CompleteGeneration, UnseededCompleteGeneration};
pub use euclidean_generation::{EuclideanGeneration, UnseededEuclideanGeneration};
pub use explicit_graph::ExplicitGraph;

use serde::{Deserialize, Serialize};

use super::{ExperimentConfigError, Fix};

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum GraphCreationConfig {
    Explicit(ExplicitGraph),
    Complete(CompleteGeneration),
    UnseededComplete(UnseededCompleteGeneration),
    Euclidean(EuclideanGeneration),
    UnseededEuclidean(UnseededEuclideanGeneration),
}

impl GraphCreationConfig {
    pub fn explicit(&self) -> Result<ExplicitGraph, ExperimentConfigError> {
        match self {
            Self::Explicit(explicit) => Ok(explicit.clone()),
            _ => Err(ExperimentConfigError::InvalidGraphConfig(
                "Config is not an explicit graph.".to_string(),
            )),
        }
    }

    pub fn complete(&self) -> Result<CompleteGeneration, ExperimentConfigError> {
        let complete = match self {
            Self::Complete(complete) => *complete,
            Self::UnseededComplete(complete) => complete.to_fixed(),
            _ => {
                return Err(ExperimentConfigError::InvalidGraphConfig(
                    "Config is not a complete graph generation.".to_string(),
                ))
            }
        };
        complete.validate()?;

        Ok(complete)
    }

    pub fn euclidean(&self) -> Result<EuclideanGeneration, ExperimentConfigError> {
        let euclidean = match self {
            Self::Euclidean(euclidean) => *euclidean,
            Self::UnseededEuclidean(euclidean) => euclidean.to_fixed(),
            _ => {
                return Err(ExperimentConfigError::InvalidGraphConfig(
                    "Config is not a euclidean graph generation.".to_string(),
                ))
            }
        };
        euclidean.validate()?;

        Ok(euclidean)
    }
}
