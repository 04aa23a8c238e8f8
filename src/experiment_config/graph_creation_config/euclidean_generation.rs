use serde::{Deserialize, Serialize};

use crate::experiment_config::{ExperimentConfigError, Fix};
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct EuclideanGeneration {
    pub size: usize,
    pub seed: u64,
    pub side_length: f64,
}

impl EuclideanGeneration {
    pub fn validate(&self) -> Result<(), ExperimentConfigError> {
        if !self.side_length.is_finite() || self.side_length <= 0.0 {
            return Err(ExperimentConfigError::InvalidGraphConfig(format!(
                "Side length {} has to be positive.",
                self.side_length
            )));
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UnseededEuclideanGeneration {
    pub size: usize,
    pub side_length: f64,
}

impl Fix<EuclideanGeneration> for UnseededEuclideanGeneration {
    fn to_fixed(&self) -> EuclideanGeneration {
        EuclideanGeneration {
            size: self.size,
            seed: (os_random_seed() >> 64) as u64,
            side_length: self.side_length,
        }
    }
}
