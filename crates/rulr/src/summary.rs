//! Streaming column summaries.
//!
//! - [`Num`]: count, Welford mean / sum of squared deviations, standard
//!   deviation and the observed min/max of a numeric column.
//! - [`Sym`]: occurrence counts of a symbolic column, kept in first-seen order.
//!
//! Missing cells never touch a summary; `add` hands them back unchanged so
//! summaries can sit inside row-building pipelines.

use crate::conf::TINY;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ------------------- Num -------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Num {
    pub n: usize,
    pub mu: f64,
    pub m2: f64,
    pub sd: f64,
    pub lo: f64,
    pub hi: f64,
    /// 1.0 when the column should be maximised, 0.0 when minimised.
    pub more: f64,
}

impl Default for Num {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Num {
    pub fn new(maximize: bool) -> Self {
        Self {
            n: 0,
            mu: 0.0,
            m2: 0.0,
            sd: 0.0,
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
            more: if maximize { 1.0 } else { 0.0 },
        }
    }

    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut num = Self::default();
        for v in values {
            num.add_f64(v);
        }
        num
    }

    /// Add one cell. Non-numeric cells are ignored like missing ones.
    pub fn add(&mut self, value: Value) -> Value {
        if let Value::Num(v) = value {
            self.add_f64(v);
        }
        value
    }

    pub fn add_f64(&mut self, v: f64) -> f64 {
        self.n += 1;
        self.lo = self.lo.min(v);
        self.hi = self.hi.max(v);
        let d = v - self.mu;
        self.mu += d / self.n as f64;
        self.m2 += d * (v - self.mu);
        self.sd = if self.n < 2 {
            0.0
        } else {
            (self.m2.max(0.0) / (self.n - 1) as f64).sqrt()
        };
        v
    }

    /// Map `v` into 0..1 using the observed range.
    pub fn norm(&self, v: f64) -> f64 {
        (v - self.lo) / (self.hi - self.lo + TINY)
    }

    /// Like [`Num::norm`] but passes missing cells through.
    pub fn normalize(&self, value: &Value) -> Value {
        match value {
            Value::Num(v) => Value::Num(self.norm(*v)),
            other => other.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

// ------------------- Sym -------------------
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sym {
    pub n: usize,
    pos: HashMap<Value, usize>,
    values: Vec<Value>,
    counts: Vec<usize>,
}

impl Sym {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: Value) -> Value {
        if value.is_missing() {
            return value;
        }
        self.n += 1;
        if let Some(&pos) = self.pos.get(&value) {
            self.counts[pos] += 1;
        } else {
            self.pos.insert(value.clone(), self.counts.len());
            self.values.push(value.clone());
            self.counts.push(1);
        }
        value
    }

    pub fn count(&self, value: &Value) -> usize {
        self.pos.get(value).map_or(0, |&pos| self.counts[pos])
    }

    /// Distinct values with their counts, in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, usize)> {
        self.values.iter().zip(self.counts.iter().copied())
    }

    pub fn distinct(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
