//! Chi-square test of independence between two categorical columns

use anyhow::{anyhow, Result};
use polars::prelude::*;
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::contingency::ContingencyTable;
use super::error::AssociationError;
use crate::report::display_dataframe;
use crate::utils::styling;

/// Outcome of a chi-square independence test.
#[derive(Debug, Clone, Serialize)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
}

/// Test the association between two categorical columns.
///
/// Builds the observed contingency table, the expected table under
/// independence and the per-cell contributions, displaying each with its
/// total margins along the way. The statistic sums the non-total
/// contributions; the p-value is the upper-tail probability of the
/// chi-square distribution with (rows-1)*(cols-1) degrees of freedom.
///
/// Fails with [`AssociationError::TooFewCategories`] when either column
/// holds fewer than 2 distinct categories, and with
/// [`AssociationError::EmptyExpectedCell`] when an expected frequency is
/// zero.
pub fn chi_square_test(df: &DataFrame, col1: &str, col2: &str) -> Result<ChiSquareResult> {
    let table = ContingencyTable::from_columns(df, col1, col2)?;

    if table.row_labels().len() < 2 {
        return Err(AssociationError::TooFewCategories {
            column: col1.to_string(),
            found: table.row_labels().len(),
        }
        .into());
    }
    if table.col_labels().len() < 2 {
        return Err(AssociationError::TooFewCategories {
            column: col2.to_string(),
            found: table.col_labels().len(),
        }
        .into());
    }

    // Before the total margins are appended.
    let degrees_of_freedom = table.degrees_of_freedom();

    styling::print_section("Observed (O)");
    display_dataframe(&table.with_totals(table.observed())?);

    let expected = table.expected();
    styling::print_section("Expected (E)");
    display_dataframe(&table.with_totals(&expected)?);

    let contributions = table.contributions(&expected)?;
    styling::print_section("Chi-Square");
    display_dataframe(&table.with_totals(&contributions)?);

    let statistic: f64 = contributions.iter().flatten().sum();

    let distribution = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| anyhow!("chi-square distribution with {degrees_of_freedom} df: {e}"))?;
    let p_value = (1.0 - distribution.cdf(statistic)).clamp(0.0, 1.0);

    Ok(ChiSquareResult {
        statistic,
        degrees_of_freedom,
        p_value,
    })
}
