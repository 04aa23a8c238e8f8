use serde::{Deserialize, Serialize};

use crate::experiment_config::{ExperimentConfigError, Fix};
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct CompleteGeneration {
    pub size: usize,
    pub seed: u64,
    /// Inclusive range of the integer edge costs.
    pub cost_range: (u64, u64),
    #[serde(default)]
    pub symmetric: bool,
}

impl CompleteGeneration {
    pub fn validate(&self) -> Result<(), ExperimentConfigError> {
        let (low, high) = self.cost_range;
        if low == 0 || low > high {
            return Err(ExperimentConfigError::InvalidGraphConfig(format!(
                "Cost range [{}, {}] has to be positive and not empty.",
                low, high
            )));
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UnseededCompleteGeneration {
    pub size: usize,
    pub cost_range: (u64, u64),
    #[serde(default)]
    pub symmetric: bool,
}

impl Fix<CompleteGeneration> for UnseededCompleteGeneration {
    fn to_fixed(&self) -> CompleteGeneration {
        CompleteGeneration {
            size: self.size,
            seed: (os_random_seed() >> 64) as u64,
            cost_range: self.cost_range,
            symmetric: self.symmetric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation(cost_range: (u64, u64)) -> CompleteGeneration {
        CompleteGeneration {
            size: 4,
            seed: 1,
            cost_range,
            symmetric: false,
        }
    }

    #[test]
    fn validate_works() {
        assert!(generation((1, 10)).validate().is_ok());
        assert!(generation((3, 3)).validate().is_ok());
        assert!(generation((0, 10)).validate().is_err(), "Zero costs are invalid.");
        assert!(generation((5, 2)).validate().is_err());
    }
}
