//! Selection module - significance testing between dataset columns

pub mod chi_square;
pub mod contingency;
pub mod error;
pub mod rank;

pub use chi_square::*;
pub use contingency::ContingencyTable;
pub use error::AssociationError;
pub use rank::*;

use anyhow::Result;
use polars::prelude::*;

/// Association testing over a borrowed dataset.
///
/// Holds a reference to the caller's DataFrame; every test reads the
/// columns it is given and returns a result struct, leaving the dataset
/// untouched.
pub struct FeatureSelection<'a> {
    data: &'a DataFrame,
}

impl<'a> FeatureSelection<'a> {
    pub fn new(data: &'a DataFrame) -> Self {
        Self { data }
    }

    /// Chi-square test of independence between two categorical columns.
    ///
    /// Displays the observed, expected and per-cell contribution tables
    /// with their totals; see [`chi_square_test`].
    pub fn chi_square_method(&self, col1: &str, col2: &str) -> Result<ChiSquareResult> {
        chi_square_test(self.data, col1, col2)
    }

    /// Mann-Whitney U test comparing two columns as independent numeric
    /// samples; see [`mann_whitney_test`].
    pub fn mann_whitney(&self, col1: &str, col2: &str) -> Result<MannWhitneyResult> {
        mann_whitney_test(self.data, col1, col2)
    }
}
