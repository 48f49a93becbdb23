//! Best/rest split of a small labeled sample.
//!
//! Rows are shuffled in place, the first `budget` rows are labeled and
//! sorted by distance to the ideal, and the closest `floor(sqrt(budget))`
//! become "best" while the remaining labeled rows become "rest". Rows past
//! the budget are kept as the round's unlabeled pool.

use crate::conf::Config;
use crate::distance::sort_by_distance;
use crate::error::{Result, RulrError};
use crate::table::Table;
use crate::value::Row;
use rand::Rng;

/// Supplies goal values for a row. Labeling is the expensive step active learning rations.
pub trait Labeler {
    fn label(&mut self, row: Row) -> Row;
}

/// Rows arrive already labeled; pass them through.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Labeler for Identity {
    fn label(&mut self, row: Row) -> Row {
        row
    }
}

#[derive(Debug, Clone)]
pub struct BestRest {
    pub best: Vec<Row>,
    pub rest: Vec<Row>,
    /// Rows past the budget in this round's shuffle; never labeled.
    pub unlabeled: Vec<Row>,
    /// Labels spent building this split.
    pub labeled: usize,
}

/// Index that separates best from rest in a sorted labeled sample of `budget` rows.
pub fn best_cut(budget: usize) -> usize {
    (budget as f64).sqrt().floor() as usize
}

/// Label one row and check the labeler kept the header's shape.
pub(crate) fn label_row<L: Labeler + ?Sized>(
    table: &Table,
    labeler: &mut L,
    row: Row,
    index: usize,
) -> Result<Row> {
    let labeled = labeler.label(row);
    if labeled.len() != table.cols().len() {
        return Err(RulrError::MalformedRow {
            row: index,
            expected: table.cols().len(),
            actual: labeled.len(),
        });
    }
    Ok(labeled)
}

pub fn split_best_rest<R, L>(
    table: &mut Table,
    config: &Config,
    rng: &mut R,
    labeler: &mut L,
) -> Result<BestRest>
where
    R: Rng + ?Sized,
    L: Labeler + ?Sized,
{
    if table.cols().n_goals() == 0 {
        return Err(RulrError::NoGoalColumns);
    }
    table.shuffle(rng);
    let table: &Table = table;

    let mut labeled: Vec<Row> = table
        .rows()
        .iter()
        .take(config.budget)
        .cloned()
        .enumerate()
        .map(|(i, row)| label_row(table, labeler, row, i))
        .collect::<Result<_>>()?;
    let unlabeled: Vec<Row> = table.rows().iter().skip(config.budget).cloned().collect();
    let n_labeled = labeled.len();
    sort_by_distance(table, &mut labeled, config.p);

    let cut = best_cut(config.budget).min(n_labeled);
    let rest = labeled.split_off(cut);
    let best = labeled;

    if best.is_empty() {
        return Err(RulrError::EmptyGroup {
            group: "best",
            labeled: n_labeled,
        });
    }
    if rest.is_empty() {
        return Err(RulrError::EmptyGroup {
            group: "rest",
            labeled: n_labeled,
        });
    }
    Ok(BestRest {
        best,
        rest,
        unlabeled,
        labeled: n_labeled,
    })
}
