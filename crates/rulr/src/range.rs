use crate::value::{Value, fmt_number};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-cell selection with missing-value handling split out.
pub trait Selector {
    fn _select_missing(&self) -> bool {
        true // Missing cells satisfy any condition
    }

    fn _select_some(&self, value: &Value) -> bool;

    fn select(&self, value: &Value) -> bool {
        match value {
            Value::Missing => self._select_missing(),
            v => self._select_some(v),
        }
    }

    fn evaluate(&self, data: &[Value]) -> Vec<bool> {
        data.iter().map(|v| self.select(v)).collect()
    }
}

/// -------------------
/// Interval
/// -------------------
/// Closed numeric bounds (possibly infinite) or a single symbolic value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Interval {
    Numeric { lo: f64, hi: f64 },
    Symbolic(Value),
}

impl Interval {
    pub fn numeric(lo: f64, hi: f64) -> Self {
        Interval::Numeric { lo, hi }
    }

    /// `(lo, hi)` as cells; a symbolic interval is `(value, value)`.
    pub fn bounds(&self) -> (Value, Value) {
        match self {
            Interval::Numeric { lo, hi } => (Value::Num(*lo), Value::Num(*hi)),
            Interval::Symbolic(v) => (v.clone(), v.clone()),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Interval::Symbolic(_))
    }
}

impl Selector for Interval {
    fn _select_some(&self, value: &Value) -> bool {
        match (self, value) {
            (Interval::Numeric { lo, hi }, Value::Num(x)) => *lo <= *x && *x <= *hi,
            (Interval::Symbolic(v), other) => v == other,
            _ => false,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.bounds();
        write!(f, "({}, {})", lo, hi)
    }
}

/// The interval of one feature column that best separates best rows from rest rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Separation score: fraction of best minus fraction of rest inside the interval.
    pub score: f64,
    pub name: String,
    pub at: usize,
    pub interval: Interval,
}

impl Range {
    pub fn new(score: f64, name: impl Into<String>, at: usize, interval: Interval) -> Self {
        Self {
            score,
            name: name.into(),
            at,
            interval,
        }
    }

    /// True when the row's cell at this column is missing or inside the interval.
    pub fn selects(&self, row: &[Value]) -> bool {
        row.get(self.at).is_none_or(|v| self.interval.select(v))
    }

    /// Descending by score.
    pub fn cmp_score_desc(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt_number(f, self.score)?;
        write!(f, ", '{}', {}, {})", self.name, self.at, self.interval)
    }
}
