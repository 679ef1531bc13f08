//! Integration tests for the record sink and row layout

use evtable_foundation::{ColumnType, ErrorKind, FilterFlag, PileupSummary, TriggerObject};
use evtable_storage::{DEFAULT_TABLE, EventRecord, EventRecordSink, MemoryWriter};

fn sink() -> EventRecordSink<MemoryWriter> {
    EventRecordSink::new(MemoryWriter::new(), EventRecord::schema(DEFAULT_TABLE))
}

// =============================================================================
// Flush Semantics
// =============================================================================

#[test]
fn second_flush_without_fill_writes_cleared_row() {
    let mut sink = sink();
    sink.register().unwrap();

    let record = sink.current_mut();
    record.push_trigger("HLT_Ele27_v1", true, 1.0);
    record.els_is_pf.push(true);
    record.jets_maxpt_id.extend([211, 13]);
    record.filters.set(FilterFlag::GoodVertices, false);
    sink.flush().unwrap();
    sink.flush().unwrap();

    let rows = &sink.writer().rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].trigger_count(), 1);
    assert!(rows[1].trigger_name.is_empty());
    assert!(rows[1].els_is_pf.is_empty());
    assert!(rows[1].jets_maxpt_id.is_empty());
    assert!(rows[1].filters.all_passed());
    assert!(rows[1].is_empty());
}

#[test]
fn flush_before_register_is_error_and_resets_row() {
    let mut sink = sink();
    sink.current_mut().mus_is_pf.push(false);
    let err = sink.flush().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SchemaNotRegistered));
    assert!(sink.current().is_empty());
    assert_eq!(sink.rows_written(), 0);
}

#[test]
fn discard_drops_partial_row() {
    let mut sink = sink();
    sink.register().unwrap();
    sink.current_mut().taus_el_ind.push(0);
    sink.discard();
    sink.flush().unwrap();
    assert!(sink.writer().rows[0].taus_el_ind.is_empty());
}

#[test]
fn finish_returns_writer_with_schema() {
    let mut sink = sink();
    sink.register().unwrap();
    sink.register().unwrap();
    let writer = sink.finish().unwrap();
    assert_eq!(writer.schema, Some(EventRecord::schema(DEFAULT_TABLE)));
    assert!(writer.rows.is_empty());
}

// =============================================================================
// Row Layout
// =============================================================================

#[test]
fn schema_declares_nested_pileup_columns() {
    let schema = EventRecord::schema("eventB");
    assert_eq!(schema.table, "eventB");
    schema.validate().unwrap();
    assert_eq!(
        schema.column("PU_zpositions").unwrap().ty,
        ColumnType::vec(ColumnType::vec(ColumnType::Float))
    );
    assert_eq!(
        schema.column("els_isPF").unwrap().ty,
        ColumnType::vec(ColumnType::Bool)
    );
    for flag in FilterFlag::ALL {
        assert_eq!(schema.column(flag.column()).unwrap().ty, ColumnType::Int);
    }
}

#[test]
fn record_appends_parallel_columns() {
    let mut record = EventRecord::new();
    record.push_trigger_object(&TriggerObject {
        collection: "hltL3MuonCandidates::HLT".to_string(),
        pt: 30.0,
        ..TriggerObject::default()
    });
    record.push_pileup(&PileupSummary {
        bunch_crossing: -1,
        z_positions: vec![0.5, -2.0],
        ..PileupSummary::default()
    });

    assert_eq!(record.standalone_triggerobject_pt, vec![30.0]);
    assert_eq!(
        record.standalone_triggerobject_collectionname,
        vec!["hltL3MuonCandidates::HLT"]
    );
    assert_eq!(record.pu_bunch_crossing, vec![-1]);
    assert_eq!(record.pu_zpositions, vec![vec![0.5, -2.0]]);
}
