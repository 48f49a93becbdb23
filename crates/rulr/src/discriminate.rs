//! Range discrimination: for one feature column, find the interval (numeric)
//! or value (symbolic) whose share of best rows most exceeds its share of
//! rest rows.
//!
//! The numeric search scores every pair of candidate cut points taken at
//! evenly spaced ranks of the merged sample, skipping pairs narrower than
//! `delta` robust standard deviations, then opens a bound to infinity when
//! almost no data lies beyond it.

use crate::conf::{Config, TINY};
use crate::range::{Interval, Range};
use crate::summary::Sym;
use crate::value::Value;
use itertools::Itertools;

/// Count of elements `< x` (or `<= x` when `inclusive`) in an ascending slice.
pub fn chop<T: PartialOrd>(sorted: &[T], x: &T, inclusive: bool) -> usize {
    if inclusive {
        sorted.partition_point(|a| a <= x)
    } else {
        sorted.partition_point(|a| a < x)
    }
}

/// Fraction of `n` attributed to the sorted values inside `[x1, x2]`. Zero when `n == 0`.
pub fn mass(sorted: &[f64], x1: f64, x2: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let inside = chop(sorted, &x2, true).saturating_sub(chop(sorted, &x1, false));
    inside as f64 / n as f64
}

/// Order-statistic stand-in for the standard deviation of an ascending slice.
///
/// Uses the 10th/90th percentiles for 10+ points, quartiles for 4..9 and the
/// endpoints below that, each scaled to match a Gaussian's sd.
pub fn robust_sd(sorted: &[f64]) -> f64 {
    let l = sorted.len();
    if l < 2 {
        0.0
    } else if l < 4 {
        (sorted[l - 1] - sorted[0]) / 4.0
    } else if l < 10 {
        let n = l / 4;
        (sorted[3 * n] - sorted[n]) / 1.35
    } else {
        let n = l / 10;
        (sorted[9 * n] - sorted[n]) / 2.56
    }
}

/// Up to `n` distinct cut points sampled at evenly spaced ranks of an ascending slice.
pub fn candidate_steps(sorted: &[f64], n: usize) -> Vec<f64> {
    if sorted.is_empty() {
        return Vec::new();
    }
    if n < 2 {
        return vec![sorted[0]];
    }
    let last = (sorted.len() - 1) as f64;
    (0..n)
        .map(|i| sorted[(i as f64 / (n - 1) as f64 * last) as usize])
        .dedup()
        .collect()
}

/// Snap `v` down to its equal-width bin; the width spans the column's observed range.
pub fn discretize(v: f64, lo: f64, hi: f64, bins: usize) -> f64 {
    let r = (hi - lo) / bins as f64 + TINY;
    (v / r).trunc() * r
}

/// Replace a bound with infinity when less than `dull` of `all` lies beyond it.
pub fn tail_extend(all: &[f64], x1: f64, x2: f64, dull: f64) -> (f64, f64) {
    let n = all.len();
    if n == 0 {
        return (x1, x2);
    }
    let left = chop(all, &x1, false) as f64 / n as f64;
    let right = (n - chop(all, &x2, true)) as f64 / n as f64;
    let lo = if left < dull { f64::NEG_INFINITY } else { x1 };
    let hi = if right < dull { f64::INFINITY } else { x2 };
    (lo, hi)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSplit {
    pub score: f64,
    pub lo: f64,
    pub hi: f64,
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .copied()
        .sorted_by(|a, b| a.total_cmp(b))
        .collect()
}

// Sorted good, sorted bad and their merge.
fn sorted_groups(good: &[f64], bad: &[f64]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let good = sorted_copy(good);
    let bad = sorted_copy(bad);
    let all = good.iter().copied().merge(bad.iter().copied()).collect();
    (good, bad, all)
}

fn search_pairs(good: &[f64], bad: &[f64], all: &[f64], config: &Config) -> Option<NumericSplit> {
    let sd = robust_sd(all);
    let steps = candidate_steps(all, config.bins);
    let min_span = config.delta * sd;

    let mut best_score = -1.0;
    let mut out = None;
    for (i, &x1) in steps.iter().enumerate() {
        for &x2 in &steps[i + 1..] {
            if x2 - x1 < min_span {
                continue;
            }
            let score = mass(good, x1, x2, good.len()) - mass(bad, x1, x2, bad.len());
            if score > best_score {
                best_score = score;
                out = Some(NumericSplit {
                    score,
                    lo: x1,
                    hi: x2,
                });
            }
        }
    }
    out
}

/// Best `[lo, hi]` pair before tail extension, or `None` when no pair is wide enough.
pub fn best_numeric_split(good: &[f64], bad: &[f64], config: &Config) -> Option<NumericSplit> {
    let (good, bad, all) = sorted_groups(good, bad);
    search_pairs(&good, &bad, &all, config)
}

pub fn best_numeric_range(
    name: &str,
    at: usize,
    good: &[f64],
    bad: &[f64],
    config: &Config,
) -> Option<Range> {
    let (good, bad, all) = sorted_groups(good, bad);
    let split = search_pairs(&good, &bad, &all, config)?;
    let (lo, hi) = tail_extend(&all, split.lo, split.hi, config.dull);
    Some(Range::new(split.score, name, at, Interval::numeric(lo, hi)))
}

/// Value seen among best rows with the largest share difference; ties keep the first seen.
pub fn best_symbolic_range(name: &str, at: usize, good: &Sym, bad: &Sym) -> Option<Range> {
    let total = (good.n + bad.n) as f64;
    if good.is_empty() {
        return None;
    }
    let mut best: Option<(f64, &Value)> = None;
    for (value, count) in good.iter() {
        let score = count as f64 / total - bad.count(value) as f64 / total;
        if best.is_none_or(|(b, _)| score > b) {
            best = Some((score, value));
        }
    }
    best.map(|(score, value)| Range::new(score, name, at, Interval::Symbolic(value.clone())))
}
