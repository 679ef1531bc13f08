//! Integration tests for filter and trigger extraction

use evtable_engine::{FlagExtractor, TriggerExtractor};
use evtable_foundation::{FilterFlag, L1TriggerWord, PathDecision, TriggerObject};
use evtable_storage::EventRecord;

#[test]
fn omitted_flag_defaults_to_pass() {
    let results = vec![
        PathDecision::new("Flag_HBHENoiseFilter", false),
        PathDecision::new("Flag_eeBadScFilter", true),
    ];
    let decisions = FlagExtractor::new().extract(&results);
    assert_eq!(decisions.value(FilterFlag::GoodVertices), 1);
    assert_eq!(decisions.value(FilterFlag::HbheNoise), 0);
    assert_eq!(decisions.value(FilterFlag::EeBadSc), 1);
}

#[test]
fn repeated_flag_last_entry_wins() {
    let results = vec![
        PathDecision::new("Flag_goodVertices", false),
        PathDecision::new("Flag_goodVertices", true),
        PathDecision::new("Flag_METFilters", true),
        PathDecision::new("Flag_METFilters", false),
    ];
    let decisions = FlagExtractor::new().extract(&results);
    assert!(decisions.passed(FilterFlag::GoodVertices));
    assert!(!decisions.passed(FilterFlag::MetFilters));
}

#[test]
fn unknown_names_are_ignored() {
    let results = vec![PathDecision::new("Flag_somethingNew", false)];
    assert!(FlagExtractor::new().extract(&results).all_passed());
}

#[test]
fn trigger_paths_keep_order_and_prescales() {
    let paths = vec![
        PathDecision::new("HLT_IsoMu20_v2", true),
        PathDecision::new("HLT_PFHT800_v2", false),
    ];
    let mut record = EventRecord::new();
    TriggerExtractor::default()
        .extract_paths(&paths, &[1.0, 20.0], &mut record)
        .unwrap();
    assert_eq!(record.trigger_name, vec!["HLT_IsoMu20_v2", "HLT_PFHT800_v2"]);
    assert_eq!(record.trigger_decision, vec![true, false]);
    assert_eq!(record.trigger_prescalevalue, vec![1.0, 20.0]);
}

#[test]
fn missing_prescales_are_malformed() {
    let paths = vec![PathDecision::new("HLT_IsoMu20_v2", true)];
    let mut record = EventRecord::new();
    let err = TriggerExtractor::default()
        .extract_paths(&paths, &[], &mut record)
        .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn trigger_object_with_unknown_path_is_malformed() {
    let paths = vec![PathDecision::new("HLT_IsoMu20_v2", true)];
    let objects = vec![TriggerObject {
        path_indices: vec![3],
        ..TriggerObject::default()
    }];
    let mut record = EventRecord::new();
    let err = TriggerExtractor::default()
        .extract_objects(&objects, &paths, &mut record)
        .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn absent_l1_word_is_null() {
    let word = TriggerExtractor::new(64).l1_word(None);
    assert_eq!(word, L1TriggerWord::null(64));
    assert!(!word.decision);
    assert_eq!(word.set_bits().count(), 0);
}
