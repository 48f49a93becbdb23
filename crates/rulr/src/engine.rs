use crate::columns::Summary;
use crate::conf::Config;
use crate::discriminate::{best_numeric_range, best_symbolic_range, discretize};
use crate::error::Result;
use crate::range::Range;
use crate::rule::{Rule, ScoredRule};
use crate::sampler::{Labeler, split_best_rest};
use crate::summary::Sym;
use crate::table::Table;
use crate::value::{Row, Value};
use log::{debug, info, warn};
use rand::Rng;

/// One range per feature column that has a discriminating interval, in column order.
///
/// Numeric values are snapped to `config.bins` equal-width bins first so a
/// single noisy value cannot produce its own cut.
pub fn build_ranges(table: &Table, best: &[Row], rest: &[Row], config: &Config) -> Vec<Range> {
    let mut ranges = Vec::new();
    for col in table.cols().x() {
        let at = col.at;
        let range = match &col.summary {
            Summary::Num(num) => {
                let binned = |rows: &[Row]| -> Vec<f64> {
                    rows.iter()
                        .filter_map(|row| row.get(at).and_then(Value::as_f64))
                        .map(|v| discretize(v, num.lo, num.hi, config.bins))
                        .collect()
                };
                best_numeric_range(&col.name, at, &binned(best), &binned(rest), config)
            }
            Summary::Sym(_) => {
                let counted = |rows: &[Row]| -> Sym {
                    let mut sym = Sym::new();
                    for value in rows.iter().filter_map(|row| row.get(at)) {
                        sym.add(value.clone());
                    }
                    sym
                };
                best_symbolic_range(&col.name, at, &counted(best), &counted(rest))
            }
        };
        match range {
            Some(range) => {
                debug!("range {}", range);
                ranges.push(range);
            }
            None => warn!("no discriminating range for column '{}'", col.name),
        }
    }
    ranges
}

/// The `top` highest-scoring ranges, best first. Ties keep column order.
pub fn top_ranges(mut ranges: Vec<Range>, top: usize) -> Vec<Range> {
    ranges.sort_by(|a, b| a.cmp_score_desc(b));
    ranges.truncate(top);
    ranges
}

/// Every non-empty subset, built by extending all earlier subsets with each next item.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut out: Vec<Vec<T>> = Vec::with_capacity((1usize << items.len().min(20)) - 1);
    for item in items {
        let mut grown: Vec<Vec<T>> = out
            .iter()
            .map(|s| {
                let mut s = s.clone();
                s.push(item.clone());
                s
            })
            .collect();
        grown.push(vec![item.clone()]);
        out.extend(grown);
    }
    out
}

/// Lazily scored candidate rules from one labeled round.
#[derive(Debug)]
pub struct Think {
    best: Vec<Row>,
    rest: Vec<Row>,
    unlabeled: Vec<Row>,
    ranges: Vec<Range>,
    labeled: usize,
    candidates: std::vec::IntoIter<Rule>,
}

impl Think {
    pub fn best(&self) -> &[Row] {
        &self.best
    }

    pub fn rest(&self) -> &[Row] {
        &self.rest
    }

    /// Rows this round left unlabeled, in the round's shuffled order.
    pub fn unlabeled(&self) -> &[Row] {
        &self.unlabeled
    }

    /// Ranges the candidates are built from, best first.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn labeled(&self) -> usize {
        self.labeled
    }

    /// Score the remaining candidates and return them best first, keeping the round's rows.
    pub fn sorted(&mut self) -> Vec<ScoredRule> {
        let mut rules: Vec<ScoredRule> = self.by_ref().collect();
        rules.sort_by(|a, b| b.cmp(a));
        rules
    }

    pub fn into_sorted(mut self) -> Vec<ScoredRule> {
        self.sorted()
    }
}

impl Iterator for Think {
    type Item = ScoredRule;

    fn next(&mut self) -> Option<ScoredRule> {
        let rule = self.candidates.next()?;
        Some(ScoredRule::evaluate(rule, &self.best, &self.rest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

impl ExactSizeIterator for Think {}

/// Label a sample, find one range per feature column and enumerate rules over the top ranges.
///
/// Shuffles `table` in place; seed `rng` for a reproducible round.
pub fn think<R, L>(table: &mut Table, config: &Config, rng: &mut R, labeler: &mut L) -> Result<Think>
where
    R: Rng + ?Sized,
    L: Labeler + ?Sized,
{
    config.validate()?;
    let split = split_best_rest(table, config, rng, labeler)?;
    let found = build_ranges(table, &split.best, &split.rest, config);
    let n_found = found.len();
    let ranges = top_ranges(found, config.top);
    let candidates: Vec<Rule> = subsets(&ranges).into_iter().map(Rule::new).collect();

    info!(
        "think: labeled {} rows ({} best, {} rest), {} ranges found, {} kept, {} candidate rules",
        split.labeled,
        split.best.len(),
        split.rest.len(),
        n_found,
        ranges.len(),
        candidates.len()
    );

    Ok(Think {
        best: split.best,
        rest: split.rest,
        unlabeled: split.unlabeled,
        ranges,
        labeled: split.labeled,
        candidates: candidates.into_iter(),
    })
}
