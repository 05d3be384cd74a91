//! Monte Carlo study driver
//!
//! For every iteration and every configured sample size `n` the study draws
//! one sample, bootstraps it, and appends a [`StudyResultRow`]. Rows come out
//! grouped by iteration, then by sample size in configured order.

use crate::config::StudyConfig;
use crate::report::StudyReport;
use crate::results::{StudyResultRow, StudyResults};
use se_core::{stats, RandomSource, Result, SeededRandom};
use se_resample::{generate_sample, Bootstrap, ResampleWorkspace};
use tracing::{debug, info, instrument};

/// A validated study, ready to run
#[derive(Debug, Clone)]
pub struct Study {
    config: StudyConfig,
    bootstrap: Bootstrap,
}

impl Study {
    /// Validate `config` and build the study
    pub fn new(config: StudyConfig) -> Result<Self> {
        config.validate()?;
        let bootstrap = Bootstrap::new().with_resamples(config.resamples);
        Ok(Self { config, bootstrap })
    }

    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Run the study with a random source seeded from the configuration
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn run(&self) -> Result<StudyResults> {
        let mut rng = SeededRandom::new(self.config.seed);
        self.run_with(&mut rng)
    }

    /// Run the study, drawing all randomness from `rng`
    pub fn run_with<R: RandomSource>(&self, rng: &mut R) -> Result<StudyResults> {
        let sizes = &self.config.sample_sizes;
        info!(
            iterations = self.config.iterations,
            resamples = self.config.resamples,
            ?sizes,
            "Starting study"
        );

        let max_n = sizes.iter().copied().max().unwrap_or(0);
        let mut workspace = ResampleWorkspace::with_capacity(max_n);
        let mut results = StudyResults::with_capacity(self.config.iterations * sizes.len());

        for iteration in 0..self.config.iterations {
            for &n in sizes {
                let sample = generate_sample(rng, &self.config.population, n)?;
                let boot = self
                    .bootstrap
                    .resample_with_workspace(&sample, rng, &mut workspace)?;

                results.push(StudyResultRow {
                    n,
                    sample_mean: stats::mean(&sample)?,
                    bootstrap_mean_of_means: boot.mean_of_means()?,
                    bootstrap_mean_of_medians: boot.mean_of_medians()?,
                });
            }
            debug!(iteration, rows = results.len(), "Iteration complete");
        }

        info!(rows = results.len(), "Study complete");
        Ok(results)
    }

    /// Reduce the rows of a run to the per-size standard-error report
    pub fn report(&self, results: &StudyResults) -> Result<StudyReport> {
        StudyReport::from_results(&self.config, results)
    }
}
