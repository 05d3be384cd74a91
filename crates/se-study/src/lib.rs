//! Monte Carlo study of bootstrap standard errors
//!
//! Compares three estimates of the standard error of the sample mean with
//! the Central Limit Theorem value `sd / sqrt(n)`:
//!
//! - the standard deviation of the sample means across iterations
//! - the standard deviation of the per-iteration bootstrap means of means
//! - the standard deviation of the per-iteration bootstrap means of medians
//!
//! # Example
//!
//! ```rust
//! use se_study::{Study, StudyConfig};
//!
//! let config = StudyConfig::default()
//!     .with_sample_sizes([10, 40])
//!     .with_iterations(10)
//!     .with_resamples(20);
//!
//! let study = Study::new(config).unwrap();
//! let results = study.run().unwrap();
//! let report = study.report(&results).unwrap();
//!
//! for size in &report.sizes {
//!     println!("n = {}: CLT {:.2}, empirical {:.2}", size.n, size.theoretical_se, size.empirical_se);
//! }
//! ```

pub mod config;
mod report;
mod results;
mod study;

pub use config::{
    StudyConfig, DEFAULT_ITERATIONS, DEFAULT_POPULATION, DEFAULT_SAMPLE_SIZES, DEFAULT_SEED,
};
pub use report::{SizeReport, StudyReport};
pub use results::{filter_by_n, ResultColumn, StudyResultRow, StudyResults};
pub use study::Study;
