//! Core types for the bootstrap standard-error study
//!
//! This crate provides the pieces every other crate in the workspace builds on:
//!
//! - [`Error`] and [`Result`]: the unified error type
//! - [`RandomSource`] and [`SeededRandom`]: the seeded generator that drives a run
//! - [`stats`]: mean, median and sample standard deviation
//!
//! # Example
//!
//! ```rust
//! use se_core::{stats, RandomSource, SeededRandom};
//!
//! let mut rng = SeededRandom::new(9999);
//! let values: Vec<f64> = (0..50).map(|_| rng.normal(100.0, 10.0)).collect();
//!
//! let m = stats::mean(&values).unwrap();
//! let sd = stats::std_dev(&values).unwrap();
//! assert!(m.is_finite() && sd > 0.0);
//! ```

pub mod error;
pub mod random;
pub mod stats;

pub use error::{Error, Result};
pub use random::{RandomSource, SeededRandom};
