//! Evaluation settings applied through the facade.

use lockstep::prelude::*;
use lockstep::Decimal;
use lockstep_test::sample_orders;

#[test]
fn test_extract_with_loaded_config() {
    let config = EvaluationConfig::from_toml_str(
        r#"
        name = "orders"
        progress_interval = 2
        warn_after_ms = 10000
        "#,
    )
    .unwrap();

    let (revenue, lines) = requests(sample_orders())
        .sum_by(|o| o.line_total())
        .count()
        .extract_with(&config)
        .unwrap();

    assert_eq!(revenue, Decimal::new(2345, 2));
    assert_eq!(lines, 4);
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = EvaluationConfig::from_yaml_str("progress_interval: 0\n").unwrap_err();
    let err: LockstepError = err.into();
    assert_eq!(err.kind(), "config");
}
