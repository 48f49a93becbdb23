//! # rulr
//!
//! Fast rule learning from a few labels.
//!
//! Given a table whose header marks goal columns (`+` to maximise, `-` to
//! minimise), feature columns and ignored columns (`X`), rulr
//!
//! 1. labels a small random sample and splits it into the rows closest to
//!    the ideal goal corner ("best") and the remainder ("rest"),
//! 2. finds, for each feature column, the interval or value that most
//!    separates best from rest,
//! 3. enumerates conjunctions of those ranges and scores each by the
//!    harmonic mean of recall on best and `1 - false alarm` on rest.
//!
//! ## Example
//!
//! ```rust
//! use rulr::conf::Config;
//! use rulr::learner::RuleLearner;
//! use rulr::table::Table;
//! use rulr::value::Value;
//!
//! let header = ["Size", "color", "Score+"];
//! let rows = (0..40).map(|i| {
//!     let size = (i % 10) as f64;
//!     let color = if i % 2 == 0 { "red" } else { "blue" };
//!     vec![Value::Num(size), Value::sym(color), Value::Num(size * 2.0)]
//! });
//! let mut table = Table::new(&header, rows).unwrap();
//!
//! let mut learner = RuleLearner::new(Config::default().with_budget(16)).unwrap();
//! let rules = learner.learn(&mut table).unwrap();
//! assert!(!rules.is_empty());
//! ```

pub mod columns;
pub mod conf;
pub mod dataframe;
pub mod discriminate;
pub mod distance;
pub mod engine;
pub mod error;
pub mod learner;
pub mod range;
pub mod rule;
pub mod sampler;
pub mod summary;
pub mod table;
pub mod value;
