//! Integration tests for rulr::conf

use rulr::conf::Config;
use rulr::error::RulrError;

#[test]
fn defaults() {
    let c = Config::default();
    assert_eq!(c.budget, 30);
    assert_eq!(c.check, 5);
    assert_eq!(c.bins, 20);
    assert_eq!(c.delta, 0.35);
    assert_eq!(c.dull, 0.01);
    assert_eq!(c.top, 12);
    assert_eq!(c.p, 2.0);
    assert_eq!(c.repeats, 10);
    assert!(c.validate().is_ok());
}

/// Missing fields fall back to their defaults.
#[test]
fn partial_json_fills_defaults() {
    let c: Config = serde_json::from_str(r#"{"budget": 50, "p": 1.0}"#).unwrap();
    assert_eq!(c.budget, 50);
    assert_eq!(c.p, 1.0);
    assert_eq!(c.bins, Config::default().bins);
    assert_eq!(c.seed, Config::default().seed);
}

#[test]
fn builders_set_fields() {
    let c = Config::default()
        .with_budget(12)
        .with_check(3)
        .with_bins(8)
        .with_delta(0.2)
        .with_dull(0.05)
        .with_top(4)
        .with_p(1.0)
        .with_repeats(2)
        .with_seed(9);
    assert_eq!(
        (c.budget, c.check, c.bins, c.top, c.repeats, c.seed),
        (12, 3, 8, 4, 2, 9)
    );
    assert_eq!((c.delta, c.dull, c.p), (0.2, 0.05, 1.0));
}

#[test]
fn validate_rejects_unusable_settings() {
    let bad = [
        Config::default().with_budget(0),
        Config::default().with_bins(1),
        Config::default().with_top(0),
        Config::default().with_repeats(0),
        Config::default().with_p(0.0),
        Config::default().with_p(f64::NAN),
        Config::default().with_delta(-0.1),
        Config::default().with_dull(1.0),
    ];
    for c in bad {
        assert!(
            matches!(c.validate(), Err(RulrError::InvalidConfig(_))),
            "{c:?}"
        );
    }
}
