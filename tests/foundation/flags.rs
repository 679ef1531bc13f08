//! Integration tests for the fixed filter flag set

use std::collections::HashSet;

use evtable_foundation::FilterFlag;

#[test]
fn every_flag_has_distinct_names() {
    let sources: HashSet<_> = FilterFlag::ALL.iter().map(|f| f.source_name()).collect();
    let columns: HashSet<_> = FilterFlag::ALL.iter().map(|f| f.column()).collect();
    assert_eq!(sources.len(), FilterFlag::COUNT);
    assert_eq!(columns.len(), FilterFlag::COUNT);
}

#[test]
fn ordinals_follow_column_order() {
    for (i, flag) in FilterFlag::ALL.iter().enumerate() {
        assert_eq!(flag.ordinal(), i);
    }
}

#[test]
fn column_lookup_roundtrip() {
    for flag in FilterFlag::ALL {
        assert_eq!(FilterFlag::from_column(flag.column()), Some(flag));
    }
    assert_eq!(FilterFlag::from_column("Flag_goodVertices"), None);
}

#[test]
fn historical_column_spelling_kept() {
    assert_eq!(
        FilterFlag::TrackingFailure.column(),
        "trackingfailturefilter_decision"
    );
    assert_eq!(FilterFlag::CscTightHalo.column(), "cschalofilter_decision");
}
