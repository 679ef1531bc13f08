//! Integration tests for event input collections

use evtable_foundation::{EventId, PileupSummary};
use evtable_storage::{CollectionSource, Event, labels};

#[test]
fn absent_required_collection_names_label() {
    let event = Event::new(EventId::new(1, 1, 1));
    let err = event.candidates().unwrap_err();
    assert!(err.is_missing_collection());
    assert!(format!("{err}").contains(labels::CANDIDATES));
    assert!(format!("{}", event.taus().unwrap_err()).contains(labels::TAUS));
}

#[test]
fn empty_event_has_required_collections_only() {
    let event = Event::empty(EventId::new(1, 1, 2));
    assert!(event.candidates().unwrap().is_empty());
    assert!(event.trigger_objects().unwrap().is_empty());
    assert!(event.pileup().is_none());
    assert!(event.l1_trigger().is_none());
    assert!(!event.is_real_data());
}

#[test]
fn builder_sets_optional_collections() {
    let event = Event::empty(EventId::new(2, 3, 4))
        .real_data(true)
        .with_pileup(vec![PileupSummary::default()]);
    assert!(event.is_real_data());
    assert_eq!(event.pileup().unwrap().len(), 1);
    assert_eq!(event.event_id(), EventId::new(2, 3, 4));
}
