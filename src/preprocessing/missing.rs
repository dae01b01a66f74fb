//! Missing value detection and remediation

use anyhow::Result;
use polars::prelude::*;

use crate::utils::styling;

/// Count missing cells across the whole DataFrame.
pub fn count_missing(df: &DataFrame) -> usize {
    df.get_columns()
        .iter()
        .map(|column| column.null_count())
        .sum()
}

/// Fill gaps in numeric columns by forward-direction linear interpolation.
///
/// Interior gaps are filled linearly between the neighboring valid values;
/// trailing gaps carry the last valid value forward. Leading gaps have no
/// preceding value and stay missing. Non-numeric columns pass through
/// unchanged.
pub fn interpolate_forward(df: &DataFrame) -> Result<DataFrame> {
    let exprs: Vec<Expr> = df
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().as_str();
            if column.dtype().is_primitive_numeric() {
                col(name).interpolate(InterpolationMethod::Linear)
            } else {
                col(name)
            }
        })
        .collect();

    let interpolated = df.clone().lazy().select(exprs).collect()?;

    // Interpolation needs a valid value on both sides of a gap, so trailing
    // gaps survive it. Carrying the last valid value forward matches the
    // forward-direction contract.
    let mut columns: Vec<Column> = Vec::with_capacity(interpolated.width());
    for column in interpolated.get_columns() {
        if column.dtype().is_primitive_numeric() && column.null_count() > 0 {
            let filled = column
                .as_materialized_series()
                .fill_null(FillNullStrategy::Forward(None))?;
            columns.push(filled.into_column());
        } else {
            columns.push(column.clone());
        }
    }

    Ok(DataFrame::new(columns)?)
}

/// Drop every row that still contains a missing value in any column.
pub fn drop_missing_rows(df: &DataFrame) -> Result<DataFrame> {
    Ok(df.clone().lazy().drop_nulls(None).collect()?)
}

/// Remediate missing values, returning a DataFrame with zero missing cells.
///
/// A clean input is returned unchanged. Otherwise the frame is interpolated
/// forward first; rows holding leading-edge gaps that interpolation cannot
/// reach are dropped afterwards. The input is never mutated.
pub fn clean_missing(df: &DataFrame) -> Result<DataFrame> {
    let missing = count_missing(df);

    if missing == 0 {
        styling::print_success("no missing value was found, data is clean and ready to use");
        return Ok(df.clone());
    }

    styling::print_count("missing values, using interpolation to fill them", missing);
    let mut cleaned = interpolate_forward(df)?;

    let remaining = count_missing(&cleaned);
    if remaining > 0 {
        styling::print_count(
            "missing values left after interpolation, dropping their rows",
            remaining,
        );
        cleaned = drop_missing_rows(&cleaned)?;
    }

    styling::print_success("missing value problem solved, data is clean and ready to use");
    Ok(cleaned)
}
