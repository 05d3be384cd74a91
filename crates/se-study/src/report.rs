//! Standard-error report per sample size

use crate::config::StudyConfig;
use crate::results::{ResultColumn, StudyResults};
use se_core::Result;
use std::fmt;
use tracing::debug;

/// The four standard-error estimates for one sample size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub n: usize,
    /// `sd / sqrt(n)` from the Central Limit Theorem
    pub theoretical_se: f64,
    /// Standard deviation of the sample means
    pub empirical_se: f64,
    /// Standard deviation of the bootstrap means of means
    pub bootstrap_mean_se: f64,
    /// Standard deviation of the bootstrap means of medians
    pub bootstrap_median_se: f64,
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples of size n = {}", self.n)?;
        writeln!(f, "  SE Mean from Central Limit Theorem: {:.2}", self.theoretical_se)?;
        writeln!(f, "  SE Mean from Samples: {:.2}", self.empirical_se)?;
        writeln!(f, "  SE Mean from Bootstrap Samples: {:.2}", self.bootstrap_mean_se)?;
        write!(f, "  SE Median from Bootstrap Samples: {:.2}", self.bootstrap_median_se)
    }
}

/// Report for a whole study, one [`SizeReport`] per configured sample size
#[derive(Debug, Clone, PartialEq)]
pub struct StudyReport {
    pub resamples: usize,
    pub sizes: Vec<SizeReport>,
}

impl StudyReport {
    /// Reduce study rows to standard errors, in configured sample-size order
    pub fn from_results(config: &StudyConfig, results: &StudyResults) -> Result<Self> {
        let sizes = config
            .sample_sizes
            .iter()
            .map(|&n| -> Result<SizeReport> {
                let report = SizeReport {
                    n,
                    theoretical_se: config.population.theoretical_se(n),
                    empirical_se: results.std_dev_by_n(n, ResultColumn::SampleMean)?,
                    bootstrap_mean_se: results
                        .std_dev_by_n(n, ResultColumn::BootstrapMeanOfMeans)?,
                    bootstrap_median_se: results
                        .std_dev_by_n(n, ResultColumn::BootstrapMeanOfMedians)?,
                };
                debug!(?report, "size summarised");
                Ok(report)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            resamples: config.resamples,
            sizes,
        })
    }

    /// Report for sample size `n`, if it was part of the study
    pub fn size(&self, n: usize) -> Option<&SizeReport> {
        self.sizes.iter().find(|s| s.n == n)
    }
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Estimated standard errors using {} bootstrap samples",
            self.resamples
        )?;
        for size in &self.sizes {
            write!(f, "\n\n{size}")?;
        }
        Ok(())
    }
}
