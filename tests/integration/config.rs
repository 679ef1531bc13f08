//! Run configuration files

use std::fs;

use evtable_foundation::ErrorKind;
use evtable_runtime::RunConfig;

#[test]
fn config_file_drives_engine_and_synthetic_options() {
    let path = std::env::temp_dir().join(format!("evtable_{}_run.toml", std::process::id()));
    fs::write(
        &path,
        r#"
        log_filter = "evtable_engine=trace"
        table = "eventC"

        [engine]
        electron_max_delta_r = 0.2
        l1_word_bits = 64

        [synthetic]
        events = 12
        seed = 99
        max_jets = 2
        "#,
    )
    .unwrap();

    let config = RunConfig::load(&path).unwrap();
    assert_eq!(config.log_filter, "evtable_engine=trace");
    assert_eq!(config.table, "eventC");
    assert!((config.engine.electron_max_delta_r - 0.2).abs() < f64::EPSILON);
    assert!((config.engine.electron_max_rel_dp - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.engine.l1_word_bits, 64);
    assert!(config.engine.require_filter_results);
    assert_eq!(config.synthetic.events, Some(12));
    assert_eq!(config.synthetic.seed, 99);
    assert_eq!(config.synthetic.max_jets, 2);
    assert_eq!(config.synthetic.max_taus, 3);

    fs::remove_file(&path).ok();
}

#[test]
fn invalid_values_are_rejected() {
    for text in [
        "[engine]\nelectron_max_rel_dp = -1.0",
        "[engine]\nl1_word_bits = 0",
        "table = \"\"",
        "unknown = [",
    ] {
        let err = RunConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigError(_)), "{text}");
    }
}
