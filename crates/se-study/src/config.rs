//! Study configuration
//!
//! The study runs with fixed parameters; [`StudyConfig::default`] is the
//! configuration the binary uses. The `with_*` builders exist so tests and
//! benches can run smaller studies.

use se_core::{Error, Result};
use se_resample::{PopulationParameters, DEFAULT_RESAMPLES};
use std::fmt;

/// Seed of the default study
pub const DEFAULT_SEED: u64 = 9999;

/// Number of Monte Carlo iterations of the default study
pub const DEFAULT_ITERATIONS: usize = 100;

/// Sample sizes of the default study, in reporting order
pub const DEFAULT_SAMPLE_SIZES: [usize; 4] = [25, 100, 225, 400];

/// Population of the default study
pub const DEFAULT_POPULATION: PopulationParameters = PopulationParameters {
    mean: 100.0,
    std_dev: 10.0,
};

/// Parameters of a standard-error study
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    /// Normal population every sample is drawn from
    pub population: PopulationParameters,
    /// Sample sizes, in the order rows are produced and reported
    pub sample_sizes: Vec<usize>,
    /// Number of Monte Carlo iterations
    pub iterations: usize,
    /// Bootstrap resamples per (iteration, sample size)
    pub resamples: usize,
    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
        }
    }
}

impl StudyConfig {
    pub fn with_population(mut self, mean: f64, std_dev: f64) -> Self {
        self.population = PopulationParameters::new(mean, std_dev);
        self
    }

    pub fn with_sample_sizes(mut self, sample_sizes: impl Into<Vec<usize>>) -> Self {
        self.sample_sizes = sample_sizes.into();
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_resamples(mut self, resamples: usize) -> Self {
        self.resamples = resamples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations whose report would be undefined
    ///
    /// Every standard error is a sample standard deviation, so each sample
    /// size and the iteration count must be at least 2.
    pub fn validate(&self) -> Result<()> {
        self.population.validate()?;

        if self.sample_sizes.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one sample size is required".to_string(),
            ));
        }
        if let Some(&n) = self.sample_sizes.iter().find(|&&n| n < 2) {
            return Err(Error::InvalidParameter(format!(
                "sample sizes must be at least 2, got {n}"
            )));
        }
        for (i, n) in self.sample_sizes.iter().enumerate() {
            if self.sample_sizes[..i].contains(n) {
                return Err(Error::InvalidParameter(format!(
                    "sample size {n} is listed more than once"
                )));
            }
        }
        if self.resamples == 0 {
            return Err(Error::InvalidParameter(
                "number of bootstrap resamples must be positive".to_string(),
            ));
        }
        if self.iterations < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: self.iterations,
            });
        }
        Ok(())
    }
}

impl fmt::Display for StudyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Running study with {} bootstrap samples", self.resamples)?;
        writeln!(f)?;
        writeln!(f, "Study conditions:")?;
        write!(
            f,
            "  Population mean: {:.2} SD: {:.2}",
            self.population.mean, self.population.std_dev
        )
    }
}
