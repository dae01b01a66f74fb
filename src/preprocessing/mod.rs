//! Preprocessing module - missing value remediation and descriptive statistics

pub mod descriptive;
pub mod missing;

pub use descriptive::*;
pub use missing::*;

use anyhow::Result;
use polars::prelude::*;

/// Missing-value cleanup and descriptive statistics over a borrowed dataset.
///
/// Holds a reference to the caller's DataFrame; every operation either
/// returns the original untouched or a newly derived frame. The held
/// dataset is never mutated.
pub struct Preprocessing<'a> {
    data: &'a DataFrame,
}

impl<'a> Preprocessing<'a> {
    pub fn new(data: &'a DataFrame) -> Self {
        Self { data }
    }

    /// Check the dataset for missing values and return a cleaned copy.
    ///
    /// See [`clean_missing`] for the remediation strategy. The returned
    /// frame is guaranteed free of missing cells.
    pub fn check_missing_value(&self) -> Result<DataFrame> {
        clean_missing(self.data)
    }

    /// Display descriptive statistics for every numeric column of `cleaned`
    /// (typically the output of [`Preprocessing::check_missing_value`]) and
    /// return the summary frame.
    pub fn descriptives(&self, cleaned: &DataFrame) -> Result<DataFrame> {
        describe(cleaned)
    }
}
