use crate::rng::os_random_seed;

pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 5.0;
pub const DEFAULT_RHO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Influence of the pheromone level on the choice of the next node.
    pub alpha: f64,
    /// Influence of the inverse edge cost on the choice of the next node.
    pub beta: f64,
    /// Evaporation rate, the fraction of pheromone lost on every update.
    pub rho: f64,
    pub seed: u128,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Params {
    pub fn new(
        alpha: f64,
        beta: f64,
        rho: f64,
        seed: Option<u128>,
        ant_count: usize,
        iterations: usize,
    ) -> Self {
        Params {
            alpha,
            beta,
            rho,
            seed: seed.unwrap_or_else(os_random_seed),
            ant_count,
            iterations,
        }
    }

    pub fn with_defaults(ant_count: usize, iterations: usize, seed: Option<u128>) -> Self {
        Params::new(
            DEFAULT_ALPHA,
            DEFAULT_BETA,
            DEFAULT_RHO,
            seed,
            ant_count,
            iterations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_defaults_works() {
        let params = Params::with_defaults(5, 50, Some(42));

        assert_eq!(params.alpha, 1.0);
        assert_eq!(params.beta, 5.0);
        assert_eq!(params.rho, 0.5);
        assert_eq!(params.seed, 42);
        assert_eq!(params.ant_count, 5);
        assert_eq!(params.iterations, 50);
    }
}
