//! Geometric lepton-to-candidate matching.
//!
//! Every lepton gets exactly one candidate: the first candidate in the pool
//! is taken by default, and is replaced only by a later candidate of the
//! same species that lies strictly closer in ΔR.

use evtable_foundation::{CandidateId, Error, Lepton, Result, delta_r};
use evtable_storage::CandidatePool;

// =============================================================================
// Lepton Matches
// =============================================================================

/// The candidate assigned to each lepton, indexed like the lepton collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeptonMatches {
    assigned: Vec<CandidateId>,
}

impl LeptonMatches {
    /// Number of leptons covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns true if there were no leptons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// The candidate assigned to a lepton.
    #[must_use]
    pub fn get(&self, lepton: usize) -> Option<CandidateId> {
        self.assigned.get(lepton).copied()
    }

    /// All assignments in lepton order.
    #[must_use]
    pub fn as_slice(&self) -> &[CandidateId] {
        &self.assigned
    }

    /// Index of the first lepton whose match is exactly this candidate.
    #[must_use]
    pub fn lepton_for(&self, candidate: CandidateId) -> Option<usize> {
        self.assigned.iter().position(|&id| id == candidate)
    }
}

// =============================================================================
// Candidate Matcher
// =============================================================================

/// Assigns one best-matching pool candidate to each lepton.
#[derive(Clone, Copy, Debug, Default)]
pub struct CandidateMatcher;

impl CandidateMatcher {
    /// Creates a matcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Matches every lepton against the pool in a single pass.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if leptons exist but the pool
    /// is empty.
    pub fn match_leptons(&self, pool: CandidatePool<'_>, leptons: &[Lepton]) -> Result<LeptonMatches> {
        if leptons.is_empty() {
            return Ok(LeptonMatches::default());
        }
        if pool.is_empty() {
            return Err(Error::malformed(format!(
                "cannot match {} leptons against an empty candidate pool",
                leptons.len()
            )));
        }

        // (candidate, ΔR to lepton) of the current best per lepton
        let mut best: Vec<Option<(CandidateId, f64)>> = vec![None; leptons.len()];

        for (id, candidate) in pool.iter() {
            for (lepton, slot) in leptons.iter().zip(best.iter_mut()) {
                let distance = delta_r(lepton, candidate);
                let replace = match *slot {
                    None => true,
                    Some((_, best_distance)) => {
                        candidate.pdg_id == lepton.pdg_id && distance < best_distance
                    }
                };
                if replace {
                    *slot = Some((id, distance));
                }
            }
        }

        let assigned = best
            .into_iter()
            .map(|slot| slot.map_or_else(CandidateId::null, |(id, _)| id))
            .collect();
        Ok(LeptonMatches { assigned })
    }
}
