//! Sample generation and bootstrap resampling
//!
//! This crate provides the two stages of the study that consume randomness:
//!
//! - **Sample generation**: [`generate_sample`] draws `n` values from a normal
//!   population described by [`PopulationParameters`]
//! - **Bootstrap**: [`Bootstrap`] resamples a sample with replacement and
//!   records the mean and median of every draw in [`BootstrapStatistics`]
//!
//! Both take the random source explicitly, so a run driven by one
//! [`se_core::SeededRandom`] is fully reproducible.
//!
//! # Example
//!
//! ```rust
//! use se_core::SeededRandom;
//! use se_resample::{generate_sample, Bootstrap, PopulationParameters};
//!
//! let mut rng = SeededRandom::new(9999);
//! let population = PopulationParameters::new(100.0, 10.0);
//!
//! let sample = generate_sample(&mut rng, &population, 25).unwrap();
//! let stats = Bootstrap::new().resample(&sample, &mut rng).unwrap();
//!
//! println!("bootstrap mean of means: {:.2}", stats.mean_of_means().unwrap());
//! ```

mod bootstrap;
mod sample;
pub mod workspace;

pub use bootstrap::{Bootstrap, BootstrapStatistics, DEFAULT_RESAMPLES};
pub use sample::{generate_sample, PopulationParameters};
pub use workspace::ResampleWorkspace;
