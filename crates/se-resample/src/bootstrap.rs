//! Bootstrap resampling of the mean and median
//!
//! Each resample draws `n` values with replacement from the sample, then
//! records the draw's mean and median. The resulting
//! [`BootstrapStatistics`] holds one mean and one median per resample.

use crate::workspace::ResampleWorkspace;
use se_core::{stats, Error, RandomSource, Result};
use tracing::{debug, instrument};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 100;

/// Per-resample means and medians from one bootstrap run
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapStatistics {
    means: Vec<f64>,
    medians: Vec<f64>,
}

impl BootstrapStatistics {
    /// Means of each bootstrap draw, in resample order
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Medians of each bootstrap draw, in resample order
    pub fn medians(&self) -> &[f64] {
        &self.medians
    }

    /// Number of resamples
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Average of the bootstrap means
    pub fn mean_of_means(&self) -> Result<f64> {
        stats::mean(&self.means)
    }

    /// Average of the bootstrap medians
    pub fn mean_of_medians(&self) -> Result<f64> {
        stats::mean(&self.medians)
    }
}

/// Bootstrap engine
///
/// # Example
///
/// ```rust
/// use se_core::SeededRandom;
/// use se_resample::Bootstrap;
///
/// let sample = vec![98.0, 101.5, 99.2, 103.1, 100.4];
/// let mut rng = SeededRandom::new(9999);
///
/// let stats = Bootstrap::new()
///     .with_resamples(200)
///     .resample(&sample, &mut rng)
///     .unwrap();
///
/// assert_eq!(stats.means().len(), 200);
/// assert_eq!(stats.medians().len(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    n_resamples: usize,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    /// Create a bootstrap engine with [`DEFAULT_RESAMPLES`] resamples
    pub fn new() -> Self {
        Self {
            n_resamples: DEFAULT_RESAMPLES,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        assert!(n_resamples > 0, "Number of resamples must be positive");
        self.n_resamples = n_resamples;
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    /// Resample `sample` and collect the mean and median of every draw
    ///
    /// Advances `rng` by exactly `n_resamples * sample.len()` uniform draws.
    #[instrument(level = "debug", skip(self, sample, rng),
                 fields(n = sample.len(), n_resamples = self.n_resamples))]
    pub fn resample<R: RandomSource>(
        &self,
        sample: &[f64],
        rng: &mut R,
    ) -> Result<BootstrapStatistics> {
        let mut workspace = ResampleWorkspace::with_capacity(sample.len());
        self.resample_with_workspace(sample, rng, &mut workspace)
    }

    /// Same as [`Bootstrap::resample`] but reuses a caller-owned workspace
    pub fn resample_with_workspace<R: RandomSource>(
        &self,
        sample: &[f64],
        rng: &mut R,
        workspace: &mut ResampleWorkspace,
    ) -> Result<BootstrapStatistics> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }

        let mut means = Vec::with_capacity(self.n_resamples);
        let mut medians = Vec::with_capacity(self.n_resamples);

        for _ in 0..self.n_resamples {
            let draw = workspace.draw(sample, rng);
            means.push(stats::mean(draw)?);
            medians.push(stats::median_sorted(workspace.sorted_draw())?);
        }

        debug!("Bootstrap completed with {} resamples", means.len());
        Ok(BootstrapStatistics { means, medians })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use se_core::SeededRandom;

    /// Replays a fixed cycle of indices and counts the draws it served
    struct CyclingIndices {
        cycle: Vec<usize>,
        calls: usize,
    }

    impl RandomSource for CyclingIndices {
        fn normal(&mut self, _mean: f64, _std_dev: f64) -> f64 {
            unreachable!("bootstrap never draws deviates")
        }

        fn uniform_int(&mut self, bound: usize) -> usize {
            let idx = self.cycle[self.calls % self.cycle.len()] % bound;
            self.calls += 1;
            idx
        }
    }

    #[test]
    fn test_bootstrap_construction() {
        let bootstrap = Bootstrap::new();
        assert_eq!(bootstrap.n_resamples(), DEFAULT_RESAMPLES);

        let bootstrap = Bootstrap::default().with_resamples(1000);
        assert_eq!(bootstrap.n_resamples(), 1000);
    }

    #[test]
    #[should_panic(expected = "Number of resamples must be positive")]
    fn test_zero_resamples_panics() {
        Bootstrap::new().with_resamples(0);
    }

    #[test]
    fn test_known_draws() {
        // Resample 1 draws indices [0, 0, 2], resample 2 draws [1, 2, 2]
        let mut rng = CyclingIndices {
            cycle: vec![0, 0, 2, 1, 2, 2],
            calls: 0,
        };
        let sample = [1.0, 4.0, 10.0];

        let stats = Bootstrap::new()
            .with_resamples(2)
            .resample(&sample, &mut rng)
            .unwrap();

        assert_eq!(stats.len(), 2);
        assert_relative_eq!(stats.means()[0], 4.0);
        assert_relative_eq!(stats.means()[1], 8.0);
        assert_eq!(stats.medians(), &[1.0, 10.0]);
        assert_relative_eq!(stats.mean_of_means().unwrap(), 6.0);
        assert_relative_eq!(stats.mean_of_medians().unwrap(), 5.5);
        assert_eq!(rng.calls, 6);
    }

    #[test]
    fn test_advances_rng_by_b_times_n() {
        let mut rng = CyclingIndices {
            cycle: vec![3, 1, 4, 1, 5],
            calls: 0,
        };
        let sample: Vec<f64> = (0..25).map(f64::from).collect();

        Bootstrap::new()
            .with_resamples(100)
            .resample(&sample, &mut rng)
            .unwrap();
        assert_eq!(rng.calls, 100 * 25);
    }

    #[test]
    fn test_single_value_sample() {
        let mut rng = SeededRandom::new(9999);
        let stats = Bootstrap::new().resample(&[7.5], &mut rng).unwrap();

        assert!(stats.means().iter().all(|&m| m == 7.5));
        assert!(stats.medians().iter().all(|&m| m == 7.5));
    }

    #[test]
    fn test_empty_sample() {
        let mut rng = SeededRandom::new(9999);
        assert_eq!(
            Bootstrap::new().resample(&[], &mut rng),
            Err(Error::empty_input())
        );
    }

    #[test]
    fn test_reproducible_with_seed() {
        let sample: Vec<f64> = (0..40).map(|i| (i as f64).sin() * 10.0).collect();
        let bootstrap = Bootstrap::new().with_resamples(50);

        let a = bootstrap.resample(&sample, &mut SeededRandom::new(42)).unwrap();
        let b = bootstrap.resample(&sample, &mut SeededRandom::new(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_workspace_reuse_matches_fresh_workspace() {
        let sample: Vec<f64> = (0..30).map(|i| i as f64 * 0.5).collect();
        let bootstrap = Bootstrap::new().with_resamples(20);
        let mut workspace = ResampleWorkspace::new();

        let mut rng = SeededRandom::new(11);
        let first = bootstrap
            .resample_with_workspace(&sample, &mut rng, &mut workspace)
            .unwrap();
        let second = bootstrap
            .resample_with_workspace(&sample, &mut rng, &mut workspace)
            .unwrap();

        let mut rng = SeededRandom::new(11);
        assert_eq!(bootstrap.resample(&sample, &mut rng).unwrap(), first);
        assert_eq!(bootstrap.resample(&sample, &mut rng).unwrap(), second);
    }

    proptest! {
        #[test]
        fn prop_lengths_equal_resample_count(
            sample in prop::collection::vec(-1e3f64..1e3, 1..60),
            b in 1usize..80,
            seed in any::<u64>(),
        ) {
            let stats = Bootstrap::new()
                .with_resamples(b)
                .resample(&sample, &mut SeededRandom::new(seed))
                .unwrap();
            prop_assert_eq!(stats.means().len(), b);
            prop_assert_eq!(stats.medians().len(), b);
        }

        #[test]
        fn prop_draw_values_come_from_sample(
            sample in prop::collection::vec(-1e3f64..1e3, 1..60),
            seed in any::<u64>(),
        ) {
            let mut rng = SeededRandom::new(seed);
            let mut workspace = ResampleWorkspace::new();
            for _ in 0..10 {
                let draw = workspace.draw(&sample, &mut rng);
                prop_assert_eq!(draw.len(), sample.len());
                prop_assert!(draw.iter().all(|v| sample.contains(v)));
            }
        }

        #[test]
        fn prop_medians_come_from_draw_range(
            sample in prop::collection::vec(-1e3f64..1e3, 1..60),
            seed in any::<u64>(),
        ) {
            let lo = sample.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let stats = Bootstrap::new()
                .with_resamples(20)
                .resample(&sample, &mut SeededRandom::new(seed))
                .unwrap();
            prop_assert!(stats.medians().iter().all(|&m| m >= lo && m <= hi));
        }
    }
}
