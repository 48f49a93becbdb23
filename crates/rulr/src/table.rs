use crate::columns::Cols;
use crate::error::{Result, RulrError};
use crate::value::{Row, Value};
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

/// Rows plus the column summaries built from them.
///
/// Summaries are streaming, so the min/max used for normalisation is only
/// final once every row has been pushed.
#[derive(Debug, Clone)]
pub struct Table {
    cols: Cols,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from a header and a stream of already-coerced rows.
    pub fn new<S, I>(header: &[S], rows: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = Row>,
    {
        let mut table = Self::empty(header)?;
        for row in rows {
            table.push(row)?;
        }
        trace!(
            "built table with {} columns ({} x, {} y) and {} rows",
            table.cols.len(),
            table.cols.x().count(),
            table.cols.n_goals(),
            table.rows.len()
        );
        Ok(table)
    }

    pub fn empty<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        Ok(Self {
            cols: Cols::new(header)?,
            rows: Vec::new(),
        })
    }

    /// Append one row, updating every live column summary.
    pub fn push(&mut self, row: Row) -> Result<()> {
        if row.len() != self.cols.len() {
            return Err(RulrError::MalformedRow {
                row: self.rows.len(),
                expected: self.cols.len(),
                actual: row.len(),
            });
        }
        self.cols.add(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Same header, fresh summaries, only `rows`.
    pub fn clone_with_rows<I: IntoIterator<Item = Row>>(&self, rows: I) -> Result<Self> {
        Self::new(&self.cols.names, rows)
    }

    pub fn cols(&self) -> &Cols {
        &self.cols
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, at: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(at))
    }

    /// Reorder rows uniformly at random, in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rows.shuffle(rng);
    }
}
