use serde::{Deserialize, Serialize};

use crate::experiment_config::{ExperimentConfigError, Fix};
use crate::metaheuristic::aco::{Params, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_RHO};
use crate::rng::os_random_seed;

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_beta() -> f64 {
    DEFAULT_BETA
}

fn default_rho() -> f64 {
    DEFAULT_RHO
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct AcoExperiment {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    pub seed: u64,
    pub ant_count: usize,
    pub iterations: usize,
}

impl AcoExperiment {
    pub fn validate(&self) -> Result<(), ExperimentConfigError> {
        if self.ant_count == 0 {
            return Err(ExperimentConfigError::InvalidAlgorithmConfig(
                "At least one ant is needed.".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(ExperimentConfigError::InvalidAlgorithmConfig(
                "At least one iteration is needed.".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(ExperimentConfigError::InvalidAlgorithmConfig(format!(
                "Evaporation rate {} is not within [0, 1].",
                self.rho
            )));
        }

        Ok(())
    }

    pub fn params(&self) -> Params {
        Params::new(
            self.alpha,
            self.beta,
            self.rho,
            Some(self.seed as u128),
            self.ant_count,
            self.iterations,
        )
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UnseededAcoExperiment {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Fix<AcoExperiment> for UnseededAcoExperiment {
    fn to_fixed(&self) -> AcoExperiment {
        AcoExperiment {
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            ant_count: self.ant_count,
            iterations: self.iterations,
            seed: (os_random_seed() >> 64) as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_keeps_all_values() {
        let experiment = AcoExperiment {
            alpha: 2.0,
            beta: 3.0,
            rho: 0.1,
            seed: 17,
            ant_count: 8,
            iterations: 30,
        };

        assert_eq!(experiment.params(), Params::new(2.0, 3.0, 0.1, Some(17), 8, 30));
    }

    #[test]
    fn validate_works() {
        let valid = AcoExperiment {
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            seed: 1,
            ant_count: 5,
            iterations: 50,
        };

        assert!(valid.validate().is_ok());
        assert!(AcoExperiment { ant_count: 0, ..valid }.validate().is_err());
        assert!(AcoExperiment { iterations: 0, ..valid }.validate().is_err());
        assert!(AcoExperiment { rho: 1.1, ..valid }.validate().is_err());
    }

    #[test]
    fn to_fixed_keeps_parameters() {
        let unseeded = UnseededAcoExperiment {
            alpha: 1.5,
            beta: 2.5,
            rho: 0.25,
            ant_count: 4,
            iterations: 12,
        };
        let fixed = unseeded.to_fixed();

        assert_eq!(
            (fixed.alpha, fixed.beta, fixed.rho, fixed.ant_count, fixed.iterations),
            (1.5, 2.5, 0.25, 4, 12)
        );
    }
}
