use crate::conf::Config;
use crate::distance::{distance_to_ideal, sort_by_distance};
use crate::engine::{Think, think};
use crate::error::Result;
use crate::rule::{Rule, ScoredRule};
use crate::sampler::{Identity, Labeler, label_row};
use crate::table::Table;
use crate::value::Row;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Outcome of applying a learned rule to rows that were not labeled while learning it.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Unlabeled rows the rule selects.
    pub selected: usize,
    /// Selected rows that were labeled, closest to ideal first (at most `config.check`).
    pub rows: Vec<Row>,
    pub best_distance: Option<f64>,
    pub mean_distance: Option<f64>,
}

impl CheckReport {
    pub fn checked(&self) -> usize {
        self.rows.len()
    }
}

/// Runs labeled rounds with its own seeded RNG so repeated runs reproduce.
pub struct RuleLearner<L: Labeler = Identity> {
    config: Config,
    rng: StdRng,
    labeler: L,
}

impl RuleLearner<Identity> {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_labeler(config, Identity)
    }
}

impl<L: Labeler> RuleLearner<L> {
    pub fn with_labeler(config: Config, labeler: L) -> Result<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            labeler,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn labeler(&self) -> &L {
        &self.labeler
    }

    /// One round of lazily scored candidate rules.
    pub fn think(&mut self, table: &mut Table) -> Result<Think> {
        think(table, &self.config, &mut self.rng, &mut self.labeler)
    }

    /// One round, every candidate scored, best first.
    pub fn learn(&mut self, table: &mut Table) -> Result<Vec<ScoredRule>> {
        Ok(self.think(table)?.into_sorted())
    }

    /// `config.repeats` rounds, each over a fresh shuffle.
    pub fn learn_repeated(&mut self, table: &mut Table) -> Result<Vec<Vec<ScoredRule>>> {
        (0..self.config.repeats)
            .map(|_| self.learn(table))
            .collect()
    }

    /// Label up to `config.check` rows the rule selects from the round's
    /// unlabeled pool and report their distances.
    ///
    /// `table` only supplies the goal normalisation, so later rounds may
    /// reshuffle it without changing which rows a round can check.
    pub fn check(&mut self, table: &Table, round: &Think, rule: &Rule) -> Result<CheckReport> {
        let pool = round.unlabeled();
        let picked: Vec<&Row> = pool.iter().filter(|row| rule.selects(row)).collect();
        let selected = picked.len();

        let mut rows: Vec<Row> = picked
            .into_iter()
            .take(self.config.check)
            .cloned()
            .enumerate()
            .map(|(i, row)| label_row(table, &mut self.labeler, row, i))
            .collect::<Result<_>>()?;
        sort_by_distance(table, &mut rows, self.config.p);

        let distances: Vec<f64> = rows
            .iter()
            .map(|row| distance_to_ideal(table, row, self.config.p))
            .collect();
        let best_distance = distances.first().copied();
        let mean_distance = if distances.is_empty() {
            None
        } else {
            Some(distances.iter().sum::<f64>() / distances.len() as f64)
        };

        info!(
            "check: rule selects {} of {} unlabeled rows, labeled {}, best distance {:?}",
            selected,
            pool.len(),
            rows.len(),
            best_distance
        );

        Ok(CheckReport {
            selected,
            rows,
            best_distance,
            mean_distance,
        })
    }
}
