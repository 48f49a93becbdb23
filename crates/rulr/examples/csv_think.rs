//! Learn rules from a CSV file whose header follows the rulr naming convention.
//!
//! ```text
//! cargo run --example csv_think -- path/to/auto93.csv [budget]
//! ```

use log::LevelFilter;
use rulr::conf::Config;
use rulr::learner::RuleLearner;
use rulr::table::Table;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: csv_think <file.csv> [budget]");
        return ExitCode::FAILURE;
    };
    let mut config = Config::default();
    if let Some(budget) = args.get(2) {
        match budget.parse() {
            Ok(b) => config = config.with_budget(b),
            Err(e) => {
                eprintln!("bad budget '{}': {}", budget, e);
                return ExitCode::FAILURE;
            }
        }
    }

    let mut table = match Table::from_csv(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut learner = match RuleLearner::new(config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match learner.learn_repeated(&mut table) {
        Ok(rounds) => {
            for rules in rounds {
                for scored in rules.iter().rev() {
                    println!("{}", scored);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
