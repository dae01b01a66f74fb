//! Mann-Whitney U rank-sum test for two independent numeric samples

use std::cmp::Ordering;

use anyhow::{anyhow, Result};
use polars::prelude::*;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use super::error::AssociationError;

/// Outcome of a Mann-Whitney U test.
#[derive(Debug, Clone, Serialize)]
pub struct MannWhitneyResult {
    /// U statistic of the first sample.
    pub statistic: f64,
    /// Two-sided p-value under the normal approximation.
    pub p_value: f64,
}

/// Compare the distributions of two numeric columns as independent samples.
///
/// The samples are the non-missing values of each column and need not be
/// paired or of equal length. Ties receive midranks, the rank variance
/// carries the usual tie correction, and the two-sided p-value uses the
/// continuity-corrected normal approximation.
pub fn mann_whitney_test(df: &DataFrame, col1: &str, col2: &str) -> Result<MannWhitneyResult> {
    let sample1 = numeric_sample(df, col1)?;
    let sample2 = numeric_sample(df, col2)?;

    let n1 = sample1.len();
    let n2 = sample2.len();
    let n = n1 + n2;

    // Combine and rank all values, tagging first-sample membership
    let mut combined: Vec<(f64, bool)> = Vec::with_capacity(n);
    combined.extend(sample1.iter().map(|&v| (v, true)));
    combined.extend(sample2.iter().map(|&v| (v, false)));
    combined.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let (ranks, tie_term) = midranks(&combined);

    let rank_sum1: f64 = combined
        .iter()
        .zip(ranks.iter())
        .filter(|((_, first), _)| *first)
        .map(|(_, rank)| *rank)
        .sum();

    let u1 = rank_sum1 - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = (n1 * n2) as f64 - u1;

    let nf = n as f64;
    let mean_u = (n1 * n2) as f64 / 2.0;
    let var_u = (n1 * n2) as f64 / 12.0 * ((nf + 1.0) - tie_term / (nf * (nf - 1.0)));

    if var_u <= 0.0 {
        return Err(AssociationError::ZeroRankVariance.into());
    }

    // Continuity-corrected two-sided normal approximation
    let z = (u1.max(u2) - mean_u - 0.5) / var_u.sqrt();
    let normal = Normal::new(0.0, 1.0).map_err(|e| anyhow!("standard normal: {e}"))?;
    let p_value = (2.0 * (1.0 - normal.cdf(z))).clamp(0.0, 1.0);

    Ok(MannWhitneyResult {
        statistic: u1,
        p_value,
    })
}

/// Non-missing values of a column, cast to f64.
fn numeric_sample(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values: Vec<f64> = series.f64()?.into_iter().flatten().collect();

    if values.is_empty() {
        return Err(AssociationError::EmptySample {
            column: name.to_string(),
        }
        .into());
    }
    Ok(values)
}

/// Assign midranks over value-sorted observations.
///
/// Returns the rank of each position and the tie-correction term
/// `sum(t^3 - t)` over tie groups of size `t`.
fn midranks(sorted: &[(f64, bool)]) -> (Vec<f64>, f64) {
    let n = sorted.len();
    let mut ranks = vec![0.0; n];
    let mut tie_term = 0.0;

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && sorted[j + 1].0 == sorted[i].0 {
            j += 1;
        }
        // 1-based ranks i+1..=j+1 averaged over the tie group
        let midrank = (i + j + 2) as f64 / 2.0;
        for rank in ranks.iter_mut().take(j + 1).skip(i) {
            *rank = midrank;
        }
        let t = (j - i + 1) as f64;
        tie_term += t * t * t - t;
        i = j + 1;
    }

    (ranks, tie_term)
}
