use crate::columns::ColumnKind;
use crate::error::Result;
use crate::table::Table;
use crate::value::{Row, Value};
use polars::prelude::*;
use std::path::Path;

/// Marker used for missing cells in CSV inputs.
pub const MISSING_MARKER: &str = "?";

// Null -> Missing, strings and booleans as-is, any other primitive as a number.
fn any_value_to_value(v: AnyValue<'_>) -> Value {
    match v {
        AnyValue::Null => Value::Missing,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::Sym(s.to_string()),
        AnyValue::StringOwned(s) => Value::Sym(s.to_string()),
        other => match other.extract::<f64>() {
            Some(x) => Value::Num(x),
            None => Value::Sym(other.to_string()),
        },
    }
}

/// Extension methods for DataFrame
pub trait RulrDataFrameExt {
    /// All column names as owned Strings
    fn column_names_vec(&self) -> Vec<String>;

    /// One column as cells. Numeric-kind names are strictly cast to f64.
    fn column_values(&self, name: &str) -> PolarsResult<Vec<Value>>;

    /// Row-major cells in column order
    fn to_rows(&self) -> PolarsResult<Vec<Row>>;
}

impl RulrDataFrameExt for DataFrame {
    fn column_names_vec(&self) -> Vec<String> {
        self.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn column_values(&self, name: &str) -> PolarsResult<Vec<Value>> {
        let series = self.column(name)?.as_materialized_series().rechunk();
        match ColumnKind::from_name(name) {
            Some(ColumnKind::Numeric) => {
                let floats = series.strict_cast(&DataType::Float64)?;
                Ok(floats
                    .f64()?
                    .into_iter()
                    .map(|o| o.map_or(Value::Missing, Value::Num))
                    .collect())
            }
            _ => Ok(series.iter().map(any_value_to_value).collect()),
        }
    }

    fn to_rows(&self) -> PolarsResult<Vec<Row>> {
        let columns = self
            .column_names_vec()
            .iter()
            .map(|name| self.column_values(name))
            .collect::<PolarsResult<Vec<_>>>()?;

        let mut rows: Vec<Row> = (0..self.height())
            .map(|_| Vec::with_capacity(columns.len()))
            .collect();
        for column in columns {
            for (row, value) in rows.iter_mut().zip(column) {
                row.push(value);
            }
        }
        Ok(rows)
    }
}

impl Table {
    /// Column names become the header; cells are converted per column kind.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let header = df.column_names_vec();
        let rows = df.to_rows()?;
        Table::new(&header, rows)
    }

    /// Read a CSV file with a header line, treating `?` as missing.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let parse_options = CsvParseOptions::default().with_null_values(Some(
            NullValues::AllColumnsSingle(PlSmallStr::from_static(MISSING_MARKER)),
        ));
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()?;
        Table::from_dataframe(&df)
    }
}
