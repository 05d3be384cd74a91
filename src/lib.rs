//! Monte Carlo study comparing bootstrap and Central Limit Theorem standard errors
//!
//! This crate re-exports the workspace crates:
//!
//! - [`se_core`]: error type, seeded random source, descriptive statistics
//! - [`se_resample`]: normal sample generation and bootstrap resampling
//! - [`se_study`]: study configuration, runner and report

pub use se_core;
pub use se_resample;
pub use se_study;

pub use se_core::{Error, Result, SeededRandom};
pub use se_study::{Study, StudyConfig, StudyReport};
