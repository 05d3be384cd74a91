//! Reusable buffers for bootstrap resampling
//!
//! A bootstrap run builds `B` draws of the same length back to back. The
//! workspace keeps one buffer for the draw and one for its sorted copy so
//! that neither is reallocated between resamples.

use se_core::RandomSource;

/// Draw and sort buffers for one sample size
#[derive(Debug, Default)]
pub struct ResampleWorkspace {
    draw: Vec<f64>,
    sorted: Vec<f64>,
}

impl ResampleWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace whose buffers already hold `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            draw: Vec::with_capacity(capacity),
            sorted: Vec::with_capacity(capacity),
        }
    }

    /// Fill the draw buffer with `sample.len()` values picked uniformly with replacement
    ///
    /// Indices are drawn one at a time, in order, so `rng` advances by exactly
    /// `sample.len()` uniform draws.
    pub fn draw<R: RandomSource>(&mut self, sample: &[f64], rng: &mut R) -> &[f64] {
        let n = sample.len();
        self.draw.clear();
        self.draw.extend((0..n).map(|_| sample[rng.uniform_int(n)]));
        &self.draw
    }

    /// The last draw, copied into the sort buffer and sorted ascending
    pub fn sorted_draw(&mut self) -> &[f64] {
        self.sorted.clear();
        self.sorted.extend_from_slice(&self.draw);
        self.sorted.sort_by(f64::total_cmp);
        &self.sorted
    }
}
