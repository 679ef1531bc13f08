//! Integration tests for candidate matching and lepton identity

use evtable_engine::{CandidateMatcher, EngineConfig, IdentityClassifier};
use evtable_foundation::{Candidate, CandidateId, Kinematics, Lepton};
use evtable_storage::CandidatePool;

// =============================================================================
// Electrons
// =============================================================================

#[test]
fn single_candidate_electron_is_faithful() {
    let candidates = vec![Candidate::new(11, Kinematics::new(10.0, 0.0, 0.0))];
    let electrons = vec![Lepton::new(11, Kinematics::new(10.0, 0.01, 0.0))];
    let pool = CandidatePool::new(&candidates);

    let matches = CandidateMatcher.match_leptons(pool, &electrons).unwrap();
    assert_eq!(matches.get(0), Some(CandidateId::new(0)));

    let identity = IdentityClassifier::default()
        .classify_electrons(pool, &electrons, &matches)
        .unwrap();
    assert_eq!(identity.is_pf, vec![true]);
    assert_eq!(identity.composite_index, vec![-1]);
}

#[test]
fn nearest_same_species_candidate_wins() {
    let candidates = vec![
        Candidate::new(11, Kinematics::new(10.0, 0.3, 0.0)),
        Candidate::new(211, Kinematics::new(10.0, 0.001, 0.0)),
        Candidate::new(11, Kinematics::new(10.0, 0.02, 0.0)),
    ];
    let electrons = vec![Lepton::new(11, Kinematics::new(10.0, 0.0, 0.0))];
    let matches = CandidateMatcher
        .match_leptons(CandidatePool::new(&candidates), &electrons)
        .unwrap();
    assert_eq!(matches.get(0), Some(CandidateId::new(2)));
}

#[test]
fn electron_outside_momentum_window_is_not_faithful() {
    let candidates = vec![Candidate::new(11, Kinematics::new(10.0, 0.0, 0.0))];
    let electrons = vec![Lepton::new(11, Kinematics::new(12.0, 0.01, 0.0))];
    let pool = CandidatePool::new(&candidates);
    let matches = CandidateMatcher.match_leptons(pool, &electrons).unwrap();

    let strict = IdentityClassifier::default();
    assert_eq!(
        strict.classify_electrons(pool, &electrons, &matches).unwrap().is_pf,
        vec![false]
    );

    let loose = IdentityClassifier::new(&EngineConfig::default().with_electron_max_rel_dp(0.5));
    assert_eq!(
        loose.classify_electrons(pool, &electrons, &matches).unwrap().is_pf,
        vec![true]
    );
}

#[test]
fn leptons_with_empty_pool_are_malformed() {
    let electrons = vec![Lepton::new(11, Kinematics::new(10.0, 0.0, 0.0))];
    let err = CandidateMatcher
        .match_leptons(CandidatePool::new(&[]), &electrons)
        .unwrap_err();
    assert!(err.is_malformed());
}

// =============================================================================
// Muons
// =============================================================================

#[test]
fn muon_with_two_sources_is_never_faithful() {
    let candidates = vec![
        Candidate::new(13, Kinematics::new(20.0, 0.5, 0.5)),
        Candidate::new(211, Kinematics::new(1.0, 0.5, 0.5)),
    ];
    let muons = vec![
        Lepton::new(13, Kinematics::new(20.0, 0.5, 0.5))
            .with_source(CandidateId::new(0))
            .with_source(CandidateId::new(1)),
        Lepton::new(13, Kinematics::new(20.0, 0.5, 0.5)).with_source(CandidateId::new(0)),
    ];
    let identity = IdentityClassifier::default()
        .classify_muons(CandidatePool::new(&candidates), &muons)
        .unwrap();
    assert_eq!(identity.is_pf, vec![false, true]);
}

#[test]
fn muon_source_of_other_species_is_not_faithful() {
    let candidates = vec![Candidate::new(211, Kinematics::new(20.0, 0.0, 0.0))];
    let muons = vec![Lepton::new(13, Kinematics::new(20.0, 0.0, 0.0)).with_source(CandidateId::new(0))];
    let identity = IdentityClassifier::default()
        .classify_muons(CandidatePool::new(&candidates), &muons)
        .unwrap();
    assert_eq!(identity.is_pf, vec![false]);
}

#[test]
fn dangling_muon_source_is_malformed() {
    let candidates = vec![Candidate::new(13, Kinematics::new(20.0, 0.0, 0.0))];
    let muons = vec![Lepton::new(13, Kinematics::new(20.0, 0.0, 0.0)).with_source(CandidateId::new(5))];
    let err = IdentityClassifier::default()
        .classify_muons(CandidatePool::new(&candidates), &muons)
        .unwrap_err();
    assert!(err.is_malformed());
}
