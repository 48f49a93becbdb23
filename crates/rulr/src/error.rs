//! Error types for rulr.

use polars::error::PolarsError;

/// All errors produced while building tables, sampling and learning rules.
#[derive(Debug, thiserror::Error)]
pub enum RulrError {
    /// A data row does not have one cell per header column.
    #[error("row {row} has {actual} cells, header declares {expected} columns")]
    MalformedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The labeled sample produced an empty best or rest group.
    #[error("empty {group} group after labeling {labeled} rows")]
    EmptyGroup { group: &'static str, labeled: usize },

    /// The header declares no goal (`+`/`-`) columns, so there is no distance to minimise.
    #[error("header declares no goal columns")]
    NoGoalColumns,

    /// Goals are normalised numerically, so they must be numeric columns.
    #[error("goal column '{name}' must be numeric (upper-case first letter)")]
    SymbolicGoal { name: String },

    #[error("column {at} has an empty name")]
    EmptyColumnName { at: usize },

    /// A numeric column received a cell that is not a number.
    #[error("numeric column '{column}' received non-numeric value {value}")]
    TypeMismatch { column: String, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, RulrError>;
