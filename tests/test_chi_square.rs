//! Integration tests for the chi-square independence test

use polars::prelude::*;
use tabeda::selection::{AssociationError, ContingencyTable};
use tabeda::FeatureSelection;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_two_by_two_hand_checked() {
    let df = common::create_survey_dataframe();
    let selection = FeatureSelection::new(&df);

    let result = selection.chi_square_method("gender", "preference").unwrap();

    assert_eq!(result.degrees_of_freedom, 1);

    // Observed [[10, 20], [30, 40]]; expected [[12, 18], [28, 42]];
    // statistic = 4/12 + 4/18 + 4/28 + 4/42
    let expected_statistic = 4.0 / 12.0 + 4.0 / 18.0 + 4.0 / 28.0 + 4.0 / 42.0;
    assert!(
        (result.statistic - expected_statistic).abs() < 1e-12,
        "statistic should be {}, got {}",
        expected_statistic,
        result.statistic
    );

    // Survival probability of chi2(1) at 0.7937
    assert!(
        (result.p_value - 0.3729).abs() < 1e-3,
        "p-value should be near 0.3729, got {}",
        result.p_value
    );
}

#[test]
fn test_contingency_table_shape_and_totals() {
    let df = common::create_survey_dataframe();

    let table = ContingencyTable::from_columns(&df, "gender", "preference").unwrap();

    assert_eq!(table.row_labels(), &["a".to_string(), "b".to_string()]);
    assert_eq!(table.col_labels(), &["x".to_string(), "y".to_string()]);
    assert_eq!(table.observed(), &[vec![10.0, 20.0], vec![30.0, 40.0]]);
    assert_eq!(table.row_totals(), vec![30.0, 70.0]);
    assert_eq!(table.col_totals(), vec![40.0, 60.0]);
    assert_eq!(table.grand_total(), 100.0);
    assert_eq!(table.degrees_of_freedom(), 1);

    let expected = table.expected();
    assert!((expected[0][0] - 12.0).abs() < 1e-12, "E[0][0] = 30*40/100");
    assert!((expected[1][1] - 42.0).abs() < 1e-12);
}

#[test]
fn test_totals_margins_appended_for_display() {
    let df = common::create_survey_dataframe();
    let table = ContingencyTable::from_columns(&df, "gender", "preference").unwrap();

    let displayed = table.with_totals(table.observed()).unwrap();

    // label column + 2 categories + Total; 2 category rows + Total
    assert_eq!(displayed.width(), 4);
    assert_eq!(displayed.height(), 3);

    let totals = displayed.column("Total").unwrap().f64().unwrap();
    assert_eq!(totals.get(0).unwrap(), 30.0);
    assert_eq!(totals.get(1).unwrap(), 70.0);
    assert_eq!(totals.get(2).unwrap(), 100.0, "grand total in the corner");
}

#[test]
fn test_single_category_column_rejected() {
    let df = common::create_survey_dataframe();
    let selection = FeatureSelection::new(&df);

    let err = selection
        .chi_square_method("constant", "preference")
        .unwrap_err();

    match err.downcast_ref::<AssociationError>() {
        Some(AssociationError::TooFewCategories { column, found }) => {
            assert_eq!(column, "constant");
            assert_eq!(*found, 1);
        }
        other => panic!("expected TooFewCategories, got {:?}", other),
    }
}

#[test]
fn test_rows_with_missing_values_skipped() {
    let df = df! {
        "left" => [Some("a"), Some("a"), None, Some("b"), Some("b")],
        "right" => [Some("x"), Some("y"), Some("x"), None, Some("y")],
    }
    .unwrap();

    let table = ContingencyTable::from_columns(&df, "left", "right").unwrap();

    assert_eq!(
        table.grand_total(),
        3.0,
        "rows missing either value do not enter the crosstab"
    );
}

#[test]
fn test_numeric_categories_accepted() {
    let df = df! {
        "flag" => [0i32, 0, 1, 1, 0, 1, 0, 1],
        "group" => ["a", "b", "a", "b", "a", "b", "a", "b"],
    }
    .unwrap();
    let selection = FeatureSelection::new(&df);

    let result = selection.chi_square_method("flag", "group").unwrap();

    assert_eq!(result.degrees_of_freedom, 1);
    assert!(result.p_value > 0.0 && result.p_value <= 1.0);
}
