use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rulr::conf::Config;
use rulr::learner::RuleLearner;
use rulr::table::Table;
use rulr::value::{Row, Value};
use std::time::Instant;

/// `Cost-` rises with `Load`, `Tput+` rises with `Cores`; `mode` is noise and `IdX` is ignored.
fn generate_table(n_rows: usize, seed: u64) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let header = ["IdX", "Cores", "Load", "mode", "Tput+", "Cost-"];
    let rows: Vec<Row> = (0..n_rows)
        .map(|i| {
            let cores = rng.random_range(1..=16) as f64;
            let load = rng.random_range(0.0..100.0);
            let mode = ["eco", "std", "turbo"][rng.random_range(0..3)];
            let tput = cores * 10.0 + rng.random_range(-5.0..5.0);
            let cost = load * 2.0 + rng.random_range(-10.0..10.0);
            vec![
                Value::Num(i as f64),
                Value::Num(cores),
                Value::Num(load),
                Value::sym(mode),
                Value::Num(tput),
                Value::Num(cost),
            ]
        })
        .collect();
    Table::new(&header, rows).expect("generated rows match the header")
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("=== rulr on a synthetic table ===");
    let mut table = generate_table(500, 7);
    println!("rows: {}, columns: {:?}", table.len(), table.cols().names);

    let config = Config::default().with_budget(30).with_repeats(3);
    let mut learner = RuleLearner::new(config).expect("default config is valid");

    let start = Instant::now();
    for round in 1..=learner.config().repeats {
        let mut thought = learner.think(&mut table).expect("learning failed");
        let rules = thought.sorted();
        println!("--- round {} ({} candidate rules) ---", round, rules.len());
        for scored in rules.iter().take(5) {
            println!("{}", scored);
        }
        if let Some(top) = rules.first() {
            let report = learner
                .check(&table, &thought, &top.rule)
                .expect("labeler keeps the header shape");
            println!(
                "check: {} selected, {} labeled, best distance {:?}, mean distance {:?}",
                report.selected,
                report.checked(),
                report.best_distance,
                report.mean_distance
            );
        }
    }
    println!("elapsed: {:?}", start.elapsed());
}
