//! Integration tests for rulr::dataframe
//!
//! Converting polars DataFrames and CSV files into tables.

use polars::prelude::*;
use rulr::dataframe::RulrDataFrameExt;
use rulr::error::RulrError;
use rulr::table::Table;
use rulr::value::Value;
use std::fs;

#[test]
fn dataframe_to_table() {
    let df = df!(
        "Size" => [Some(1.0), None, Some(3.0)],
        "color" => ["r", "g", "b"],
        "flag" => [true, false, true],
        "Score+" => [10i64, 20, 30]
    )
    .unwrap();

    let table = Table::from_dataframe(&df).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.cols().names, vec!["Size", "color", "flag", "Score+"]);
    assert_eq!(table.cell(0, 0), Some(&Value::Num(1.0)));
    assert_eq!(table.cell(1, 0), Some(&Value::Missing));
    assert_eq!(table.cell(2, 1), Some(&Value::sym("b")));
    assert_eq!(table.cell(1, 2), Some(&Value::Bool(false)));
    // integer goal is cast to float
    assert_eq!(table.cell(1, 3), Some(&Value::Num(20.0)));

    let size = table.cols().get("Size").unwrap().num().unwrap();
    assert_eq!(size.n, 2);
}

/// Numbers in a symbolic column become symbols keyed by value.
#[test]
fn symbolic_numbers_stay_numbers() {
    let df = df!("origin" => [1i32, 2, 1], "Y+" => [1.0, 2.0, 3.0]).unwrap();
    let values = df.column_values("origin").unwrap();
    assert_eq!(values, vec![Value::Num(1.0), Value::Num(2.0), Value::Num(1.0)]);

    let table = Table::from_dataframe(&df).unwrap();
    let origin = table.cols().get("origin").unwrap().sym().unwrap();
    assert_eq!(origin.count(&Value::Num(1.0)), 2);
}

#[test]
fn to_rows_is_row_major() {
    let df = df!("A" => [1.0, 2.0], "b" => ["x", "y"]).unwrap();
    let rows = df.to_rows().unwrap();
    assert_eq!(
        rows,
        vec![
            vec![Value::Num(1.0), Value::sym("x")],
            vec![Value::Num(2.0), Value::sym("y")],
        ]
    );
    assert_eq!(df.column_names_vec(), vec!["A", "b"]);
}

#[test]
fn text_in_numeric_column_is_a_polars_error() {
    let df = df!("A" => ["x", "y"], "Y+" => [1.0, 2.0]).unwrap();
    let err = Table::from_dataframe(&df).unwrap_err();
    assert!(matches!(err, RulrError::Polars(_)));
}

#[test]
fn csv_question_marks_are_missing() {
    let path = std::env::temp_dir().join(format!("rulr_csv_test_{}.csv", std::process::id()));
    fs::write(&path, "Cyl,origin,Mpg+\n4,1,30\n8,?,10\n6,2,?\n").unwrap();

    let table = Table::from_csv(&path);
    fs::remove_file(&path).unwrap();
    let table = table.unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.cell(0, 0), Some(&Value::Num(4.0)));
    assert_eq!(table.cell(1, 1), Some(&Value::Missing));
    assert_eq!(table.cell(2, 2), Some(&Value::Missing));
    assert_eq!(table.cols().n_goals(), 1);

    let mpg = table.cols().get("Mpg+").unwrap().num().unwrap();
    assert_eq!(mpg.n, 2);
    assert_eq!(mpg.hi, 30.0);
}

#[test]
fn missing_csv_file_is_an_error() {
    let path = std::env::temp_dir().join("rulr_definitely_missing_file.csv");
    assert!(Table::from_csv(&path).is_err());
}
