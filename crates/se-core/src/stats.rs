//! Descriptive statistics over slices of `f64`
//!
//! Unlike a plain reducer these return `Result` so that an empty slice, or a
//! single value passed to [`std_dev`], surfaces as
//! [`Error::InsufficientData`] rather than NaN.

use crate::{Error, Result};

/// Sort data and return a new vector
///
/// Uses IEEE 754 total ordering, so NaN values end up at the end.
///
/// # Examples
///
/// ```rust
/// use se_core::stats::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean of a slice
///
/// # Examples
///
/// ```rust
/// use se_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

/// Median of a slice
///
/// Sorts a copy of the data. For an even count the two middle values are
/// averaged, for an odd count the middle value is returned.
///
/// # Examples
///
/// ```rust
/// use se_core::stats::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    median_sorted(&sorted(data))
}

/// Median of data that is already sorted ascending
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(Error::empty_input());
    }
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Sample standard deviation (Bessel's correction, divides by `n - 1`)
///
/// Accumulates with Welford's update, which keeps a constant sequence at
/// exactly zero. Needs at least two values.
///
/// # Examples
///
/// ```rust
/// use se_core::stats::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data).unwrap();
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }

    let mut running_mean = 0.0;
    let mut sum_sq = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let delta = x - running_mean;
        running_mean += delta / (i + 1) as f64;
        sum_sq += delta * (x - running_mean);
    }

    let variance = sum_sq / (data.len() - 1) as f64;
    let sd = variance.sqrt();
    if !sd.is_finite() {
        return Err(Error::non_finite("standard deviation"));
    }
    Ok(sd)
}
