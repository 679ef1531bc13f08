//! Integration tests for the candidate pool

use evtable_foundation::{Candidate, CandidateId, Kinematics};
use evtable_storage::CandidatePool;

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(211, Kinematics::new(3.0, 0.1, 0.2)),
        Candidate::new(11, Kinematics::new(9.0, -0.5, 1.0)),
        Candidate::new(22, Kinematics::new(1.5, 2.0, -1.0)),
    ]
}

#[test]
fn ids_are_pool_positions() {
    let candidates = candidates();
    let pool = CandidatePool::new(&candidates);
    for (id, candidate) in pool.iter() {
        assert_eq!(&candidates[id.index()], candidate);
        assert_eq!(pool.get(id).unwrap(), candidate);
    }
    assert_eq!(pool.len(), 3);
}

#[test]
fn out_of_range_and_null_ids_do_not_resolve() {
    let candidates = candidates();
    let pool = CandidatePool::new(&candidates);
    assert!(!pool.contains(CandidateId::new(3)));
    assert!(!pool.contains(CandidateId::null()));
    assert!(pool.get(CandidateId::new(3)).unwrap_err().is_malformed());
}

#[test]
fn empty_pool() {
    let pool = CandidatePool::new(&[]);
    assert!(pool.is_empty());
    assert_eq!(pool.iter().count(), 0);
}
