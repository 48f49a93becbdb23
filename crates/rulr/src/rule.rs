//! A rule is a conjunction of [`Range`]s, one per column it constrains.
//!
//! Rules are scored against the best and rest groups of a labeled sample by
//! the harmonic mean of recall (best rows selected) and `1 - pf` (rest rows
//! correctly left out).

use crate::range::Range;
use crate::value::{Row, Value};
use core::fmt;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Candidate rules built by the engine always hold at least one range. An
/// empty rule constrains nothing and selects every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub ranges: Vec<Range>,
}

impl Rule {
    pub fn new(ranges: Vec<Range>) -> Self {
        Self { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Every range must hold; missing cells satisfy their range.
    pub fn selects(&self, row: &[Value]) -> bool {
        self.ranges.iter().all(|range| range.selects(row))
    }

    /// Fraction of `rows` this rule selects; zero for no rows.
    pub fn coverage(&self, rows: &[Row]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        rows.iter().filter(|row| self.selects(row)).count() as f64 / rows.len() as f64
    }

    pub fn recall(&self, best: &[Row]) -> f64 {
        self.coverage(best)
    }

    pub fn false_alarm(&self, rest: &[Row]) -> f64 {
        self.coverage(rest)
    }

    /// Harmonic mean of recall and `1 - pf`; 0 when both are zero.
    pub fn score(&self, best: &[Row], rest: &[Row]) -> f64 {
        let recall = self.recall(best);
        let not_pf = 1.0 - self.false_alarm(rest);
        if recall + not_pf == 0.0 {
            return 0.0;
        }
        2.0 * recall * not_pf / (recall + not_pf)
    }

    /// Names of the columns this rule constrains, in rule order.
    pub fn column_names(&self) -> Vec<&str> {
        self.ranges.iter().map(|r| r.name.as_str()).collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.ranges.iter().join(", "))
    }
}

/// A candidate rule with its score; orders by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRule {
    pub score: f64,
    pub rule: Rule,
}

impl ScoredRule {
    pub fn new(score: f64, rule: Rule) -> Self {
        Self { score, rule }
    }

    pub fn evaluate(rule: Rule, best: &[Row], rest: &[Row]) -> Self {
        Self::new(rule.score(best, rest), rule)
    }
}

impl PartialEq for ScoredRule {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for ScoredRule {}
impl PartialOrd for ScoredRule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ScoredRule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

impl fmt::Display for ScoredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {}", self.score, self.rule)
    }
}
