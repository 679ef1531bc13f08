//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use evtable_foundation::{CandidateId, Error, ErrorContext, ErrorKind, EventId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn missing_collection_carries_label() {
    let err = Error::missing_collection("slimmedTaus");
    assert!(err.is_missing_collection());
    assert!(!err.is_malformed());
    assert!(matches!(&err.kind, ErrorKind::MissingCollection { label } if label == "slimmedTaus"));
}

#[test]
fn dangling_candidate_message() {
    let err = Error::dangling_candidate(CandidateId::new(12), 4);
    assert!(err.is_malformed());
    let msg = format!("{err}");
    assert!(msg.contains("pf#12"));
    assert!(msg.contains('4'));
}

#[test]
fn schema_not_registered_display() {
    let err = Error::new(ErrorKind::SchemaNotRegistered);
    assert!(format!("{err}").contains("not registered"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn outer_context_fills_gaps_only() {
    let err = Error::malformed("bad")
        .with_context(ErrorContext::new().with_stage("identity"))
        .with_context(
            ErrorContext::new()
                .with_event_number(8)
                .with_event_id(EventId::new(3, 4, 5))
                .with_stage("outer"),
        );

    let ctx = err.context.unwrap();
    assert_eq!(ctx.stage, Some("identity"));
    assert_eq!(ctx.event_number, Some(8));
    assert_eq!(ctx.event_id, Some(EventId::new(3, 4, 5)));
}

#[test]
fn context_display_without_id() {
    let ctx = ErrorContext::new().with_event_number(2).with_stage("flush");
    assert_eq!(format!("{ctx}"), "event #2 in flush");
}
