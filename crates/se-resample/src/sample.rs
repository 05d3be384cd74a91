//! Normal population samples

use se_core::{Error, RandomSource, Result};

/// Mean and standard deviation of the normal population samples are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationParameters {
    /// Population mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl PopulationParameters {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Check that both parameters are finite and the standard deviation is positive
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "population mean must be finite, got {}",
                self.mean
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "population standard deviation must be finite and positive, got {}",
                self.std_dev
            )));
        }
        Ok(())
    }

    /// Standard error of the mean of an `n`-sized sample, `sd / sqrt(n)`
    pub fn theoretical_se(&self, n: usize) -> f64 {
        self.std_dev / (n as f64).sqrt()
    }
}

/// Draw `size` independent values from `N(mean, std_dev)`
///
/// Advances `rng` by exactly `size` normal draws.
pub fn generate_sample<R: RandomSource>(
    rng: &mut R,
    population: &PopulationParameters,
    size: usize,
) -> Result<Vec<f64>> {
    if size == 0 {
        return Err(Error::empty_input());
    }
    Ok((0..size)
        .map(|_| rng.normal(population.mean, population.std_dev))
        .collect())
}
