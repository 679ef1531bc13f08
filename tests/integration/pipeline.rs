//! End-to-end event processing through the processor and sink

use evtable_engine::{EngineConfig, EventProcessor};
use evtable_foundation::{
    Candidate, CandidateId, CompositeObject, EventId, FilterFlag, Kinematics, L1TriggerWord,
    Lepton, PathDecision, PileupSummary, TriggerObject,
};
use evtable_storage::{DEFAULT_TABLE, Event, EventRecord, EventRecordSink, MemoryWriter};

// =============================================================================
// Helper Functions
// =============================================================================

fn sink() -> EventRecordSink<MemoryWriter> {
    let mut sink = EventRecordSink::new(MemoryWriter::new(), EventRecord::schema(DEFAULT_TABLE));
    sink.register().unwrap();
    sink
}

/// One electron and one muon inside the same jet, plus a single-prong tau
/// on the electron.
fn lepton_jet_event(n: u64) -> Event {
    Event::empty(EventId::new(260_627, 12, n))
        .with_candidates(vec![
            Candidate::new(-11, Kinematics::new(5.0, 0.2, 0.1)),
            Candidate::new(13, Kinematics::new(8.0, -0.4, 2.0)),
            Candidate::new(211, Kinematics::new(3.0, 1.0, -1.0)),
        ])
        .with_electrons(vec![Lepton::new(-11, Kinematics::new(5.05, 0.21, 0.1))])
        .with_muons(vec![
            Lepton::new(13, Kinematics::new(8.0, -0.4, 2.0)).with_source(CandidateId::new(1)),
        ])
        .with_jets(vec![CompositeObject::new(vec![
            CandidateId::new(0),
            CandidateId::new(1),
            CandidateId::new(2),
        ])])
        .with_taus(vec![CompositeObject::new(vec![CandidateId::new(0)])])
        .with_filter_results(vec![
            PathDecision::new("Flag_HBHENoiseFilter", true),
            PathDecision::new("Flag_eeBadScFilter", false),
        ])
        .with_triggers(
            vec![
                PathDecision::new("HLT_Ele27_eta2p1_WPLoose_Gsf_v1", true),
                PathDecision::new("HLT_IsoMu20_v2", false),
            ],
            vec![1.0, 5.0],
        )
        .with_trigger_objects(vec![TriggerObject {
            collection: "hltEgammaCandidates::HLT".to_string(),
            pt: 27.5,
            path_indices: vec![0],
            ..TriggerObject::default()
        }])
        .with_pileup(vec![
            PileupSummary {
                bunch_crossing: 0,
                num_interactions: 2,
                true_num_interactions: 2.4,
                z_positions: vec![1.0, -3.5],
                ..PileupSummary::default()
            },
        ])
}

// =============================================================================
// Full Events
// =============================================================================

#[test]
fn lepton_jet_event_fills_every_block() {
    let mut processor = EventProcessor::default();
    let mut sink = sink();
    processor.run_event(&lepton_jet_event(1), &mut sink).unwrap();

    let row = &sink.writer().rows[0];
    assert_eq!(row.els_is_pf, vec![true]);
    assert_eq!(row.mus_is_pf, vec![true]);
    assert_eq!(row.jets_maxpt_id, vec![13]);
    assert_eq!(row.jets_el_ind, vec![0]);
    assert_eq!(row.jets_mu_ind, vec![0]);
    assert_eq!(row.els_jet_ind, vec![0]);
    assert_eq!(row.mus_jet_ind, vec![0]);
    assert_eq!(row.taus_el_ind, vec![0]);
    assert_eq!(row.taus_mu_ind, vec![-1]);

    assert!(row.filters.passed(FilterFlag::HbheNoise));
    assert!(!row.filters.passed(FilterFlag::EeBadSc));
    assert!(row.filters.passed(FilterFlag::GoodVertices));

    assert_eq!(row.trigger_prescalevalue, vec![1.0, 5.0]);
    assert_eq!(row.standalone_triggerobject_pt, vec![27.5]);
    assert_eq!(row.pu_zpositions, vec![vec![1.0, -3.5]]);
    assert_eq!(row.pu_num_interactions, vec![2]);
}

#[test]
fn lengths_follow_input_collections() {
    let mut processor = EventProcessor::default();
    let event = lepton_jet_event(1)
        .with_jets(vec![
            CompositeObject::new(vec![CandidateId::new(2)]),
            CompositeObject::new(Vec::new()),
            CompositeObject::new(vec![CandidateId::new(0)]),
        ])
        .with_l1_trigger(L1TriggerWord::null(128));
    let record = processor.process(&event).unwrap();

    assert_eq!(record.jets_maxpt_id, vec![211, 0, -11]);
    assert_eq!(record.jets_el_ind, vec![-1, -1, 0]);
    assert_eq!(record.jets_mu_ind, vec![-1, -1, -1]);
    assert_eq!(record.els_jet_ind, vec![2]);
    assert_eq!(record.mus_jet_ind, vec![-1]);
}

#[test]
fn rows_do_not_leak_between_events() {
    let mut processor = EventProcessor::default();
    let mut sink = sink();
    processor.run_event(&lepton_jet_event(1), &mut sink).unwrap();

    let quiet = Event::empty(EventId::new(260_627, 12, 2)).with_pileup(Vec::new());
    processor.run_event(&quiet, &mut sink).unwrap();

    let rows = &sink.writer().rows;
    assert_eq!(rows.len(), 2);
    assert!(rows[1].is_empty());
    assert!(rows[1].filters.all_passed());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_taus_abort_without_row() {
    let mut processor = EventProcessor::default();
    let mut sink = sink();
    let mut event = lepton_jet_event(1);
    event.taus = None;

    let err = processor.run_event(&event, &mut sink).unwrap_err();
    assert!(err.is_missing_collection());
    assert!(format!("{err}").contains("slimmedTaus"));
    assert_eq!(sink.rows_written(), 0);
    assert!(sink.current().is_empty());
}

#[test]
fn dangling_tau_constituent_aborts_event() {
    let mut processor = EventProcessor::default();
    let mut sink = sink();
    let event = lepton_jet_event(1).with_taus(vec![CompositeObject::new(vec![CandidateId::new(7)])]);

    let err = processor.run_event(&event, &mut sink).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.context.unwrap().stage, Some("tau-resolution"));
    assert_eq!(sink.rows_written(), 0);
}

#[test]
fn real_data_may_omit_pileup() {
    let mut processor = EventProcessor::default();
    let mut event = lepton_jet_event(1).real_data(true);
    event.pileup = None;
    let record = processor.process(&event).unwrap();
    assert!(record.pu_bunch_crossing.is_empty());
    assert_eq!(record.els_is_pf, vec![true]);
}

#[test]
fn absent_filters_pass_when_optional() {
    let mut event = lepton_jet_event(1);
    event.filter_results = None;
    let mut processor =
        EventProcessor::new(EngineConfig::default().with_require_filter_results(false));
    let record = processor.process(&event).unwrap();
    assert!(record.filters.all_passed());
}

#[test]
fn duplicate_filter_keeps_last_decision() {
    let event = lepton_jet_event(1).with_filter_results(vec![
        PathDecision::new("Flag_goodVertices", true),
        PathDecision::new("Flag_goodVertices", false),
    ]);
    let record = EventProcessor::default().process(&event).unwrap();
    assert_eq!(record.filters.value(FilterFlag::GoodVertices), 0);
}
