//! Integration tests for jet and tau attribution

use evtable_engine::{
    CandidateMatcher, CompositeAttributionEngine, IdentityClassifier, LeptonTarget,
    TauOverlapResolver,
};
use evtable_foundation::{Candidate, CandidateId, CompositeObject, Kinematics, Lepton};
use evtable_storage::CandidatePool;

/// An electron candidate (p=5), a muon candidate (p=8), and a hadron.
fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(11, Kinematics::new(5.0, 0.0, 0.0)),
        Candidate::new(13, Kinematics::new(8.0, 1.0, 1.0)),
        Candidate::new(211, Kinematics::new(2.0, -1.0, 2.0)),
    ]
}

fn electrons() -> Vec<Lepton> {
    vec![Lepton::new(11, Kinematics::new(5.0, 0.0, 0.0))]
}

fn muons() -> Vec<Lepton> {
    vec![Lepton::new(13, Kinematics::new(8.0, 1.0, 1.0)).with_source(CandidateId::new(1))]
}

#[test]
fn jet_with_electron_and_muon() {
    let candidates = candidates();
    let (electrons, muons) = (electrons(), muons());
    let pool = CandidatePool::new(&candidates);
    let classifier = IdentityClassifier::default();

    let electron_matches = CandidateMatcher.match_leptons(pool, &electrons).unwrap();
    let muon_matches = CandidateMatcher.match_leptons(pool, &muons).unwrap();
    assert_eq!(electron_matches.get(0), Some(CandidateId::new(0)));
    assert_eq!(muon_matches.get(0), Some(CandidateId::new(1)));

    let mut electron_identity = classifier
        .classify_electrons(pool, &electrons, &electron_matches)
        .unwrap();
    let mut muon_identity = classifier.classify_muons(pool, &muons).unwrap();

    let jets = vec![
        CompositeObject::new(vec![CandidateId::new(2)]),
        CompositeObject::new(vec![CandidateId::new(0), CandidateId::new(1)]),
    ];
    let attribution = CompositeAttributionEngine
        .attribute(
            pool,
            &jets,
            &mut LeptonTarget::new(&electron_matches, &mut electron_identity),
            &mut LeptonTarget::new(&muon_matches, &mut muon_identity),
        )
        .unwrap();

    assert_eq!(attribution.coarse_id, vec![211, 13]);
    assert_eq!(attribution.best_electron, vec![-1, 0]);
    assert_eq!(attribution.best_muon, vec![-1, 0]);
    assert_eq!(electron_identity.composite_index, vec![1]);
    assert_eq!(muon_identity.composite_index, vec![1]);
}

#[test]
fn empty_jet_has_no_leptons() {
    let candidates = candidates();
    let pool = CandidatePool::new(&candidates);
    let electron_matches = CandidateMatcher.match_leptons(pool, &[]).unwrap();
    let muon_matches = CandidateMatcher.match_leptons(pool, &[]).unwrap();
    let mut electron_identity = IdentityClassifier::default()
        .classify_electrons(pool, &[], &electron_matches)
        .unwrap();
    let mut muon_identity = IdentityClassifier::default().classify_muons(pool, &[]).unwrap();

    let attribution = CompositeAttributionEngine
        .attribute(
            pool,
            &[CompositeObject::new(Vec::new())],
            &mut LeptonTarget::new(&electron_matches, &mut electron_identity),
            &mut LeptonTarget::new(&muon_matches, &mut muon_identity),
        )
        .unwrap();
    assert_eq!(attribution.len(), 1);
    assert_eq!(attribution.best_electron, vec![-1]);
    assert_eq!(attribution.best_muon, vec![-1]);
}

#[test]
fn only_single_prong_taus_are_resolved() {
    let candidates = candidates();
    let (electrons, muons) = (electrons(), muons());
    let pool = CandidatePool::new(&candidates);
    let electron_matches = CandidateMatcher.match_leptons(pool, &electrons).unwrap();
    let muon_matches = CandidateMatcher.match_leptons(pool, &muons).unwrap();

    let taus = vec![
        CompositeObject::new(vec![CandidateId::new(0)]),
        CompositeObject::new(vec![CandidateId::new(1)]),
        CompositeObject::new(vec![CandidateId::new(0), CandidateId::new(1), CandidateId::new(2)]),
        CompositeObject::new(vec![CandidateId::new(2)]),
    ];
    let resolved = TauOverlapResolver
        .resolve(pool, &taus, &electron_matches, &muon_matches)
        .unwrap();
    assert_eq!(resolved.electron, vec![0, -1, -1, -1]);
    assert_eq!(resolved.muon, vec![-1, 0, -1, -1]);
}

#[test]
fn dangling_tau_constituent_is_malformed() {
    let candidates = candidates();
    let pool = CandidatePool::new(&candidates);
    let none = CandidateMatcher.match_leptons(pool, &[]).unwrap();
    let taus = vec![CompositeObject::new(vec![CandidateId::new(9)])];
    let err = TauOverlapResolver.resolve(pool, &taus, &none, &none).unwrap_err();
    assert!(err.is_malformed());
}
