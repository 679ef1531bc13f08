//! The per-event candidate pool.
//!
//! Candidates are identified by their position in the pool; every
//! reference held by leptons and composites resolves through here.

// Pools hold tens to thousands of candidates; positions always fit in u32.
#![allow(clippy::cast_possible_truncation)]

use evtable_foundation::{Candidate, CandidateId, Error, Result};

/// Non-owning view of one event's candidates.
#[derive(Clone, Copy, Debug)]
pub struct CandidatePool<'a> {
    candidates: &'a [Candidate],
}

impl<'a> CandidatePool<'a> {
    /// Wraps the event's candidate collection.
    #[must_use]
    pub fn new(candidates: &'a [Candidate]) -> Self {
        Self { candidates }
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if the pool has no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Resolves a candidate id.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if the id is null or out of
    /// range for this event.
    pub fn get(&self, id: CandidateId) -> Result<&'a Candidate> {
        if id.is_null() {
            return Err(Error::dangling_candidate(id, self.len()));
        }
        self.candidates
            .get(id.index())
            .ok_or_else(|| Error::dangling_candidate(id, self.len()))
    }

    /// Checks if an id resolves in this pool.
    #[must_use]
    pub fn contains(&self, id: CandidateId) -> bool {
        !id.is_null() && id.index() < self.len()
    }

    /// Iterates over `(id, candidate)` pairs in pool order.
    pub fn iter(self) -> impl Iterator<Item = (CandidateId, &'a Candidate)> + 'a {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (CandidateId::new(i as u32), c))
    }
}
