//! Shared test utilities and fixture generators

use polars::prelude::*;

/// Create a DataFrame with no missing values
pub fn create_clean_dataframe() -> DataFrame {
    df! {
        "age" => [23.0f64, 31.0, 45.0, 27.0, 52.0],
        "income" => [40.0f64, 55.0, 80.0, 48.0, 95.0],
        "group" => ["a", "b", "a", "b", "a"],
    }
    .unwrap()
}

/// Create a DataFrame where every gap has a valid value on both sides
pub fn create_interior_gap_dataframe() -> DataFrame {
    df! {
        "a" => [Some(1.0f64), None, Some(3.0), Some(4.0), Some(5.0)],
        "b" => [Some(10.0f64), Some(20.0), None, None, Some(50.0)],
    }
    .unwrap()
}

/// Create a DataFrame with a leading gap that forward interpolation cannot fill
pub fn create_leading_gap_dataframe() -> DataFrame {
    df! {
        "a" => [None::<f64>, Some(2.0), Some(3.0), Some(4.0)],
        "b" => [1.0f64, 2.0, 3.0, 4.0],
    }
    .unwrap()
}

/// Create a survey-style DataFrame whose crosstab of (gender, preference)
/// is the 2x2 table [[10, 20], [30, 40]]
pub fn create_survey_dataframe() -> DataFrame {
    let mut gender: Vec<&str> = Vec::with_capacity(100);
    let mut preference: Vec<&str> = Vec::with_capacity(100);

    for (g, p, count) in [("a", "x", 10), ("a", "y", 20), ("b", "x", 30), ("b", "y", 40)] {
        for _ in 0..count {
            gender.push(g);
            preference.push(p);
        }
    }

    df! {
        "gender" => gender,
        "preference" => preference,
        "constant" => vec!["only"; 100],
    }
    .unwrap()
}
