//! Descriptive statistics summary

use anyhow::Result;
use polars::prelude::*;

use crate::report::display_dataframe;
use crate::utils::styling;

/// Statistic labels, one per row of the summary frame.
const STATISTICS: [&str; 11] = [
    "count", "mean", "std", "min", "25%", "50%", "75%", "max", "median", "skew", "kurt",
];

/// Compute, display and return a descriptive summary of every numeric column.
///
/// The summary holds statistics as rows (the standard describe set plus
/// median, skew and excess kurtosis) and the input's numeric columns as
/// columns. Skew and kurtosis use the bias-corrected conventions, with
/// kurtosis in the Fisher (normal = 0) definition.
pub fn describe(df: &DataFrame) -> Result<DataFrame> {
    styling::print_progress("showing descriptive statistics of the dataset");

    let mut columns: Vec<Column> = Vec::with_capacity(df.width() + 1);
    columns.push(Column::new("statistic".into(), STATISTICS.to_vec()));

    for column in df.get_columns() {
        if !column.dtype().is_primitive_numeric() {
            continue;
        }

        let series = column.as_materialized_series().cast(&DataType::Float64)?;
        let values = column_summary(&series)?;
        columns.push(Column::new(column.name().clone(), values));
    }

    let summary = DataFrame::new(columns)?;
    display_dataframe(&summary);
    Ok(summary)
}

/// One summary column, in [`STATISTICS`] order.
fn column_summary(series: &Series) -> Result<Vec<Option<f64>>> {
    let ca = series.f64()?;
    let count = (series.len() - series.null_count()) as f64;

    Ok(vec![
        Some(count),
        ca.mean(),
        ca.std(1),
        ca.min(),
        ca.quantile(0.25, QuantileMethod::Linear)?,
        ca.quantile(0.50, QuantileMethod::Linear)?,
        ca.quantile(0.75, QuantileMethod::Linear)?,
        ca.max(),
        ca.median(),
        series.skew(false)?,
        series.kurtosis(true, false)?,
    ])
}
