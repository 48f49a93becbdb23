use crate::error::{Result, RulrError};
use serde::{Deserialize, Serialize};

/// Added to range widths and normalisation denominators so constant columns never divide by zero.
pub const TINY: f64 = 1e-32;

/// Settings consumed by the sampler, range finder and rule engine.
///
/// Every entry point takes a `&Config`; nothing is read from process-wide state.
/// Partial serde documents fall back to the defaults field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows drawn and labeled per round.
    pub budget: usize,
    /// Rows labeled when checking a learned rule against unlabeled data.
    pub check: usize,
    /// Equal-width bins for numeric columns, also the number of candidate cut points.
    pub bins: usize,
    /// Cohen's effect size: ranges narrower than `delta * sd` are ignored.
    pub delta: f64,
    /// Tail mass below which a bound is opened to infinity.
    pub dull: f64,
    /// Ranges kept before enumerating subsets.
    pub top: usize,
    /// Minkowski exponent of the distance to the ideal goal corner.
    pub p: f64,
    /// Rounds run by `RuleLearner::learn_repeated`.
    pub repeats: usize,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: 30,
            check: 5,
            bins: 20,
            delta: 0.35,
            dull: 0.01,
            top: 12,
            p: 2.0,
            repeats: 10,
            seed: 1701,
        }
    }
}

impl Config {
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_check(mut self, check: usize) -> Self {
        self.check = check;
        self
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_dull(mut self, dull: f64) -> Self {
        self.dull = dull;
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject settings the algorithms cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.budget == 0 {
            return Err(RulrError::InvalidConfig("budget must be at least 1".into()));
        }
        if self.bins < 2 {
            return Err(RulrError::InvalidConfig(format!(
                "bins ({}) must be at least 2",
                self.bins
            )));
        }
        if self.top == 0 {
            return Err(RulrError::InvalidConfig("top must be at least 1".into()));
        }
        if self.repeats == 0 {
            return Err(RulrError::InvalidConfig("repeats must be at least 1".into()));
        }
        if !(self.p.is_finite() && self.p > 0.0) {
            return Err(RulrError::InvalidConfig(format!(
                "p ({}) must be a positive number",
                self.p
            )));
        }
        if !(self.delta.is_finite() && self.delta >= 0.0) {
            return Err(RulrError::InvalidConfig(format!(
                "delta ({}) must be non-negative",
                self.delta
            )));
        }
        if !(0.0..1.0).contains(&self.dull) {
            return Err(RulrError::InvalidConfig(format!(
                "dull ({}) must lie in [0, 1)",
                self.dull
            )));
        }
        Ok(())
    }
}
