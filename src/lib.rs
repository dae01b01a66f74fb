//! Tabeda: Exploratory Data Analysis Helpers
//!
//! A library for notebook-style exploration of tabular datasets:
//! missing value remediation, descriptive statistics, and categorical
//! association testing (chi-square and Mann-Whitney U).

pub mod preprocessing;
pub mod report;
pub mod selection;
pub mod utils;

pub use preprocessing::Preprocessing;
pub use selection::FeatureSelection;
