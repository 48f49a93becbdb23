//! Integration tests for rulr::range and rulr::rule
//!
//! Selection semantics (closed numeric bounds, symbolic equality, missing
//! cells satisfy anything), rule scoring and display.

use approx::assert_abs_diff_eq;
use rulr::range::{Interval, Range, Selector};
use rulr::rule::{Rule, ScoredRule};
use rulr::value::{Row, Value};

fn num_range(at: usize, lo: f64, hi: f64) -> Range {
    Range::new(0.5, "A", at, Interval::numeric(lo, hi))
}

fn sym_range(at: usize, v: &str) -> Range {
    Range::new(0.25, "color", at, Interval::Symbolic(Value::sym(v)))
}

fn row(a: f64, color: &str) -> Row {
    vec![Value::Num(a), Value::sym(color)]
}

// ---------------------------
// Interval / Range
// ---------------------------

#[test]
fn numeric_interval_is_closed() {
    let i = Interval::numeric(1.0, 3.0);
    assert_eq!(
        i.evaluate(&[0.5, 1.0, 2.0, 3.0, 3.5].map(Value::Num)),
        vec![false, true, true, true, false]
    );
    assert!(!i.select(&Value::sym("2")));
}

#[test]
fn infinite_bounds_select_everything_numeric() {
    let i = Interval::numeric(f64::NEG_INFINITY, f64::INFINITY);
    assert!(i.select(&Value::Num(-1e300)));
    assert!(i.select(&Value::Num(1e300)));
}

#[test]
fn symbolic_interval_matches_equal_value() {
    let i = Interval::Symbolic(Value::sym("red"));
    assert!(i.select(&Value::sym("red")));
    assert!(!i.select(&Value::sym("blue")));
    assert!(i.is_symbolic());
    assert_eq!(i.bounds(), (Value::sym("red"), Value::sym("red")));
}

/// A missing cell satisfies any range.
#[test]
fn missing_cell_is_selected() {
    assert!(Interval::numeric(1.0, 2.0).select(&Value::Missing));
    assert!(Interval::Symbolic(Value::sym("red")).select(&Value::Missing));
    let r = num_range(0, 1.0, 2.0);
    assert!(r.selects(&[Value::Missing, Value::sym("x")]));
}

#[test]
fn range_display() {
    let r = Range::new(0.75, "Cyl", 1, Interval::numeric(f64::NEG_INFINITY, 4.0));
    assert_eq!(r.to_string(), "(0.750, 'Cyl', 1, (-inf, 4))");
    let r = Range::new(1.0, "origin", 2, Interval::Symbolic(Value::sym("eu")));
    assert_eq!(r.to_string(), "(1, 'origin', 2, ('eu', 'eu'))");
}

// ---------------------------
// Rule
// ---------------------------

#[test]
fn rule_is_a_conjunction() {
    let rule = Rule::new(vec![num_range(0, 1.0, 5.0), sym_range(1, "red")]);
    assert_eq!(rule.len(), 2);
    assert!(rule.selects(&row(3.0, "red")));
    assert!(!rule.selects(&row(3.0, "blue")));
    assert!(!rule.selects(&row(9.0, "red")));
    assert!(rule.selects(&[Value::Missing, Value::sym("red")]));
    assert_eq!(rule.column_names(), vec!["A", "color"]);
}

#[test]
fn empty_rule_selects_every_row() {
    let rule = Rule::new(vec![]);
    assert!(rule.is_empty());
    assert!(rule.selects(&row(0.0, "anything")));
}

#[test]
fn recall_false_alarm_and_score() {
    let rule = Rule::new(vec![num_range(0, 0.0, 5.0)]);
    let best = vec![row(1.0, "a"), row(2.0, "a"), row(3.0, "a"), row(9.0, "a")];
    let rest = vec![row(4.0, "a"), row(8.0, "a"), row(9.0, "a"), row(10.0, "a")];

    assert_abs_diff_eq!(rule.recall(&best), 0.75);
    assert_abs_diff_eq!(rule.false_alarm(&rest), 0.25);
    // harmonic mean of 0.75 and 0.75
    assert_abs_diff_eq!(rule.score(&best, &rest), 0.75, epsilon = 1e-12);
}

#[test]
fn score_is_harmonic_mean() {
    let rule = Rule::new(vec![num_range(0, 0.0, 5.0)]);
    let best = vec![row(1.0, "a"), row(9.0, "a")];
    let rest = vec![row(20.0, "a"), row(30.0, "a")];
    // recall 0.5, 1 - pf = 1.0
    assert_abs_diff_eq!(rule.score(&best, &rest), 2.0 * 0.5 / 1.5, epsilon = 1e-12);
}

/// Selecting no best row and every rest row scores zero instead of NaN.
#[test]
fn score_is_zero_at_the_degenerate_corner() {
    let rule = Rule::new(vec![num_range(0, 5.0, 10.0)]);
    let best = vec![row(1.0, "a")];
    let rest = vec![row(6.0, "a"), row(7.0, "a")];
    assert_eq!(rule.score(&best, &rest), 0.0);
}

#[test]
fn coverage_of_no_rows_is_zero() {
    let rule = Rule::new(vec![]);
    assert_eq!(rule.coverage(&[]), 0.0);
}

// ---------------------------
// ScoredRule
// ---------------------------

#[test]
fn scored_rules_order_by_score() {
    let a = ScoredRule::new(0.2, Rule::new(vec![num_range(0, 0.0, 1.0)]));
    let b = ScoredRule::new(0.9, Rule::new(vec![sym_range(1, "red")]));
    let mut rules = vec![a.clone(), b.clone()];
    rules.sort_by(|x, y| y.cmp(x));
    assert_eq!(rules[0].score, 0.9);
    assert!(a < b);
}

#[test]
fn scored_rule_display() {
    let rule = Rule::new(vec![num_range(0, 1.0, 2.5), sym_range(1, "red")]);
    let scored = ScoredRule::new(0.5, rule);
    assert_eq!(
        scored.to_string(),
        "0.500 [(0.500, 'A', 0, (1, 2.500)), (0.250, 'color', 1, ('red', 'red'))]"
    );
}
