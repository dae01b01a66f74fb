//! Error types for association testing.

use thiserror::Error;

/// Failure modes of the association tests.
///
/// These are carried through `anyhow::Error`, so callers that need to
/// distinguish them can `downcast_ref::<AssociationError>()`.
#[derive(Debug, Error, PartialEq)]
pub enum AssociationError {
    /// A chi-square input column holds fewer than 2 distinct categories.
    ///
    /// Degrees of freedom would be zero, which makes the p-value
    /// degenerate, so the test refuses the input instead.
    #[error("column '{column}' has {found} distinct categories; chi-square needs at least 2")]
    TooFewCategories { column: String, found: usize },

    /// An expected-frequency cell is zero.
    ///
    /// Happens when a row or column margin of the contingency table is
    /// empty; the per-cell chi-square contribution would divide by zero.
    #[error("expected frequency is zero for cell ('{row}', '{column}'); its margin holds no observations")]
    EmptyExpectedCell { row: String, column: String },

    /// A rank-test input column holds no non-missing numeric values.
    #[error("column '{column}' has no non-missing numeric values")]
    EmptySample { column: String },

    /// Every observation across both samples has the same value, so the
    /// rank variance is zero and the normal approximation is undefined.
    #[error("all observations are tied across both samples; rank variance is zero")]
    ZeroRankVariance,
}
