//! Column descriptors derived from header names.
//!
//! The first character decides the kind (upper-case means numeric), the last
//! character decides the role:
//!
//! | Suffix | Role |
//! |--------|------|
//! | `+` | goal, maximise |
//! | `-` | goal, minimise |
//! | `X` | ignored |
//! | other | feature |

use crate::error::{Result, RulrError};
use crate::summary::{Num, Sym};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Symbolic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Goal { maximize: bool },
    Feature,
    Ignored,
}

impl ColumnKind {
    pub fn from_name(name: &str) -> Option<Self> {
        name.chars().next().map(|c| {
            if c.is_uppercase() {
                ColumnKind::Numeric
            } else {
                ColumnKind::Symbolic
            }
        })
    }
}

impl ColumnRole {
    pub fn from_name(name: &str) -> Option<Self> {
        name.chars().last().map(|c| match c {
            '+' => ColumnRole::Goal { maximize: true },
            '-' => ColumnRole::Goal { maximize: false },
            'X' => ColumnRole::Ignored,
            _ => ColumnRole::Feature,
        })
    }
}

/// Running statistics for one column; the variant is fixed by the column kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    Num(Num),
    Sym(Sym),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub at: usize,
    pub name: String,
    pub kind: ColumnKind,
    pub role: ColumnRole,
    pub summary: Summary,
}

impl Column {
    pub fn new(at: usize, name: &str) -> Result<Self> {
        let kind = ColumnKind::from_name(name).ok_or(RulrError::EmptyColumnName { at })?;
        let role = ColumnRole::from_name(name).ok_or(RulrError::EmptyColumnName { at })?;
        let summary = match kind {
            ColumnKind::Numeric => {
                let maximize = !matches!(role, ColumnRole::Goal { maximize: false });
                Summary::Num(Num::new(maximize))
            }
            ColumnKind::Symbolic => Summary::Sym(Sym::new()),
        };
        Ok(Self {
            at,
            name: name.to_string(),
            kind,
            role,
            summary,
        })
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.role, ColumnRole::Goal { .. })
    }

    pub fn is_feature(&self) -> bool {
        self.role == ColumnRole::Feature
    }

    pub fn is_ignored(&self) -> bool {
        self.role == ColumnRole::Ignored
    }

    pub fn num(&self) -> Option<&Num> {
        match &self.summary {
            Summary::Num(num) => Some(num),
            Summary::Sym(_) => None,
        }
    }

    pub fn sym(&self) -> Option<&Sym> {
        match &self.summary {
            Summary::Sym(sym) => Some(sym),
            Summary::Num(_) => None,
        }
    }

    /// Err when a numeric column would receive a present non-number.
    pub fn accepts(&self, value: &Value) -> Result<()> {
        if self.is_ignored() || value.is_missing() {
            return Ok(());
        }
        match (&self.summary, value) {
            (Summary::Num(_), Value::Num(_)) | (Summary::Sym(_), _) => Ok(()),
            (Summary::Num(_), other) => Err(RulrError::TypeMismatch {
                column: self.name.clone(),
                value: other.to_string(),
            }),
        }
    }

    /// Fold one cell into the summary. Ignored columns and missing cells are no-ops.
    pub fn add(&mut self, value: &Value) -> Result<()> {
        self.accepts(value)?;
        if self.is_ignored() {
            return Ok(());
        }
        match &mut self.summary {
            Summary::Num(num) => {
                num.add(value.clone());
            }
            Summary::Sym(sym) => {
                sym.add(value.clone());
            }
        }
        Ok(())
    }
}

/// All columns of a table plus the goal (y) and feature (x) subsets, in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cols {
    pub names: Vec<String>,
    pub all: Vec<Column>,
    x: Vec<usize>,
    y: Vec<usize>,
}

impl Cols {
    pub fn new<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let mut all = Vec::with_capacity(header.len());
        let mut x = Vec::new();
        let mut y = Vec::new();
        for (at, name) in header.iter().enumerate() {
            let col = Column::new(at, name.as_ref())?;
            match col.role {
                ColumnRole::Goal { .. } => {
                    if col.kind != ColumnKind::Numeric {
                        return Err(RulrError::SymbolicGoal { name: col.name });
                    }
                    y.push(at);
                }
                ColumnRole::Feature => x.push(at),
                ColumnRole::Ignored => {}
            }
            all.push(col);
        }
        Ok(Self {
            names: header.iter().map(|s| s.as_ref().to_string()).collect(),
            all,
            x,
            y,
        })
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn x(&self) -> impl Iterator<Item = &Column> {
        self.x.iter().map(|&at| &self.all[at])
    }

    pub fn y(&self) -> impl Iterator<Item = &Column> {
        self.y.iter().map(|&at| &self.all[at])
    }

    pub fn n_goals(&self) -> usize {
        self.y.len()
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.all.iter().find(|c| c.name == name)
    }

    /// Update every live column from one row; the row must already have the header's length.
    ///
    /// Every cell is checked before any summary changes, so a rejected row leaves no trace.
    pub fn add(&mut self, row: &[Value]) -> Result<()> {
        for col in &self.all {
            col.accepts(&row[col.at])?;
        }
        for col in self.all.iter_mut() {
            col.add(&row[col.at])?;
        }
        Ok(())
    }
}
