//! Contingency table construction for categorical association testing

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use polars::prelude::*;

use super::error::AssociationError;

/// Cross-tabulation of joint observed frequencies for two categorical
/// columns, with col1 categories as rows and col2 categories as columns.
///
/// Labels are kept in sorted order. The count matrix covers observed
/// categories only; synthetic "Total" margins are appended at display
/// time by [`ContingencyTable::with_totals`] and never enter the
/// degrees-of-freedom or statistic computations.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    row_name: String,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Vec<Vec<f64>>,
}

impl ContingencyTable {
    /// Build the table from two columns of the dataset.
    ///
    /// Rows where either value is missing are skipped, following the
    /// usual crosstab convention.
    pub fn from_columns(df: &DataFrame, col1: &str, col2: &str) -> Result<Self> {
        let rows = df.column(col1)?.as_materialized_series();
        let cols = df.column(col2)?.as_materialized_series();

        let mut pair_counts: BTreeMap<(String, String), f64> = BTreeMap::new();
        let mut row_set: BTreeSet<String> = BTreeSet::new();
        let mut col_set: BTreeSet<String> = BTreeSet::new();

        for (row_value, col_value) in rows.iter().zip(cols.iter()) {
            if matches!(row_value, AnyValue::Null) || matches!(col_value, AnyValue::Null) {
                continue;
            }
            let row_label = category_label(&row_value);
            let col_label = category_label(&col_value);
            *pair_counts
                .entry((row_label.clone(), col_label.clone()))
                .or_insert(0.0) += 1.0;
            row_set.insert(row_label);
            col_set.insert(col_label);
        }

        let row_labels: Vec<String> = row_set.into_iter().collect();
        let col_labels: Vec<String> = col_set.into_iter().collect();

        let counts: Vec<Vec<f64>> = row_labels
            .iter()
            .map(|r| {
                col_labels
                    .iter()
                    .map(|c| {
                        pair_counts
                            .get(&(r.clone(), c.clone()))
                            .copied()
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            row_name: col1.to_string(),
            row_labels,
            col_labels,
            counts,
        })
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Observed counts, without total margins.
    pub fn observed(&self) -> &[Vec<f64>] {
        &self.counts
    }

    pub fn row_totals(&self) -> Vec<f64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn col_totals(&self) -> Vec<f64> {
        (0..self.col_labels.len())
            .map(|j| self.counts.iter().map(|row| row[j]).sum())
            .collect()
    }

    pub fn grand_total(&self) -> f64 {
        self.counts.iter().flatten().sum()
    }

    /// Degrees of freedom of the pre-totals table: (rows-1) * (cols-1).
    pub fn degrees_of_freedom(&self) -> usize {
        self.row_labels.len().saturating_sub(1) * self.col_labels.len().saturating_sub(1)
    }

    /// Expected frequencies under independence:
    /// cell\[i, j\] = row_total\[i\] * col_total\[j\] / grand_total.
    pub fn expected(&self) -> Vec<Vec<f64>> {
        let row_totals = self.row_totals();
        let col_totals = self.col_totals();
        let grand = self.grand_total();

        row_totals
            .iter()
            .map(|&r| col_totals.iter().map(|&c| r * c / grand).collect())
            .collect()
    }

    /// Per-cell chi-square contributions (O - E)^2 / E.
    ///
    /// Errors on a zero expected cell, which would otherwise become a
    /// silent division by zero.
    pub fn contributions(&self, expected: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let mut contributions = Vec::with_capacity(self.counts.len());
        for (i, row) in self.counts.iter().enumerate() {
            let mut out = Vec::with_capacity(row.len());
            for (j, &observed) in row.iter().enumerate() {
                let e = expected[i][j];
                if e == 0.0 {
                    return Err(AssociationError::EmptyExpectedCell {
                        row: self.row_labels[i].clone(),
                        column: self.col_labels[j].clone(),
                    }
                    .into());
                }
                out.push((observed - e).powi(2) / e);
            }
            contributions.push(out);
        }
        Ok(contributions)
    }

    /// Render a matrix that shares this table's shape as a DataFrame with
    /// a synthetic "Total" row and column appended.
    pub fn with_totals(&self, matrix: &[Vec<f64>]) -> Result<DataFrame> {
        let mut labels: Vec<String> = self.row_labels.clone();
        labels.push("Total".to_string());

        let mut columns: Vec<Column> = Vec::with_capacity(self.col_labels.len() + 2);
        columns.push(Column::new(self.row_name.as_str().into(), labels));

        let mut row_sums = vec![0.0; matrix.len()];
        let mut grand = 0.0;

        for (j, col_label) in self.col_labels.iter().enumerate() {
            let mut values: Vec<f64> = Vec::with_capacity(matrix.len() + 1);
            let mut col_sum = 0.0;
            for (i, row) in matrix.iter().enumerate() {
                values.push(row[j]);
                col_sum += row[j];
                row_sums[i] += row[j];
            }
            grand += col_sum;
            values.push(col_sum);
            columns.push(Column::new(col_label.as_str().into(), values));
        }

        row_sums.push(grand);
        columns.push(Column::new("Total".into(), row_sums));

        Ok(DataFrame::new(columns)?)
    }
}

/// Display label for a categorical cell value.
///
/// Strings render bare rather than through AnyValue's quoted Display.
fn category_label(value: &AnyValue) -> String {
    match value {
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}
