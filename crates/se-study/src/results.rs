//! Study result rows
//!
//! One [`StudyResultRow`] is produced per (iteration, sample size). Rows
//! accumulate in [`StudyResults`], which only supports appending and reading.

use se_core::{stats, Result};

/// Outcome of one (iteration, sample size) step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyResultRow {
    /// Sample size
    pub n: usize,
    /// Mean of the generated sample
    pub sample_mean: f64,
    /// Mean of the bootstrap means
    pub bootstrap_mean_of_means: f64,
    /// Mean of the bootstrap medians
    pub bootstrap_mean_of_medians: f64,
}

impl StudyResultRow {
    /// Value of one numeric column
    pub fn value(&self, column: ResultColumn) -> f64 {
        match column {
            ResultColumn::SampleMean => self.sample_mean,
            ResultColumn::BootstrapMeanOfMeans => self.bootstrap_mean_of_means,
            ResultColumn::BootstrapMeanOfMedians => self.bootstrap_mean_of_medians,
        }
    }
}

/// Numeric columns of a [`StudyResultRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultColumn {
    SampleMean,
    BootstrapMeanOfMeans,
    BootstrapMeanOfMedians,
}

/// Rows whose sample size equals `n`, in their original order
pub fn filter_by_n(rows: &[StudyResultRow], n: usize) -> Vec<&StudyResultRow> {
    rows.iter().filter(|row| row.n == n).collect()
}

/// Append-only collection of study rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyResults {
    rows: Vec<StudyResultRow>,
}

impl StudyResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Append a row
    pub fn push(&mut self, row: StudyResultRow) {
        self.rows.push(row);
    }

    /// All rows, in the order they were appended
    pub fn rows(&self) -> &[StudyResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows for sample size `n`
    pub fn filter_by_n(&self, n: usize) -> Vec<&StudyResultRow> {
        filter_by_n(&self.rows, n)
    }

    /// One column of the rows for sample size `n`
    pub fn column(&self, n: usize, column: ResultColumn) -> Vec<f64> {
        self.filter_by_n(n)
            .into_iter()
            .map(|row| row.value(column))
            .collect()
    }

    /// Sample standard deviation of one column across the rows for `n`
    pub fn std_dev_by_n(&self, n: usize, column: ResultColumn) -> Result<f64> {
        stats::std_dev(&self.column(n, column))
    }
}

impl Extend<StudyResultRow> for StudyResults {
    fn extend<I: IntoIterator<Item = StudyResultRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl FromIterator<StudyResultRow> for StudyResults {
    fn from_iter<I: IntoIterator<Item = StudyResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
