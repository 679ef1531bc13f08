//! Jet constituent attribution and coarse typing.

// Collection indices are written as 32-bit ints; events hold far fewer objects.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use evtable_foundation::{CompositeObject, Error, Momentum, Result, Species};
use evtable_storage::CandidatePool;

use crate::identity::LeptonIdentity;
use crate::matcher::LeptonMatches;

/// One lepton collection as seen by attribution: the matched candidates,
/// plus the containing-jet indices to fill in.
#[derive(Debug)]
pub struct LeptonTarget<'a> {
    /// Candidate matched to each lepton.
    pub matches: &'a LeptonMatches,
    /// Identity results whose `composite_index` is updated.
    pub identity: &'a mut LeptonIdentity,
}

impl<'a> LeptonTarget<'a> {
    /// Pairs matches with the identity results of the same collection.
    pub fn new(matches: &'a LeptonMatches, identity: &'a mut LeptonIdentity) -> Self {
        Self { matches, identity }
    }

    fn check_lengths(&self, species: Species) -> Result<()> {
        if self.matches.len() == self.identity.composite_index.len() {
            return Ok(());
        }
        Err(Error::malformed(format!(
            "{} {species} matches but {} {species} identity entries",
            self.matches.len(),
            self.identity.composite_index.len()
        )))
    }
}

/// Per-jet attribution results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JetAttribution {
    /// Species id of the highest-momentum constituent, 0 for empty jets.
    pub coarse_id: Vec<i32>,
    /// Index of the highest-momentum contained electron, or -1.
    pub best_electron: Vec<i32>,
    /// Index of the highest-momentum contained muon, or -1.
    pub best_muon: Vec<i32>,
}

impl JetAttribution {
    /// Number of jets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coarse_id.len()
    }

    /// Returns true if there were no jets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coarse_id.is_empty()
    }
}

/// Attributes jet constituents to leptons.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompositeAttributionEngine;

impl CompositeAttributionEngine {
    /// Creates the engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Walks every jet's constituents once.
    ///
    /// A lepton's containing-jet index is set on every identity hit, so a
    /// candidate shared by several jets ends up pointing at the last one.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if a target's matches and
    /// identity results differ in length, or if a constituent id does not
    /// resolve in the pool.
    pub fn attribute(
        &self,
        pool: CandidatePool<'_>,
        jets: &[CompositeObject],
        electrons: &mut LeptonTarget<'_>,
        muons: &mut LeptonTarget<'_>,
    ) -> Result<JetAttribution> {
        electrons.check_lengths(Species::Electron)?;
        muons.check_lengths(Species::Muon)?;

        let mut result = JetAttribution {
            coarse_id: Vec::with_capacity(jets.len()),
            best_electron: Vec::with_capacity(jets.len()),
            best_muon: Vec::with_capacity(jets.len()),
        };

        for (jet_index, jet) in jets.iter().enumerate() {
            let mut max_p = f64::NEG_INFINITY;
            let mut max_id = 0;
            let mut best_electron = Best::new();
            let mut best_muon = Best::new();

            for &id in &jet.constituents {
                let candidate = pool.get(id)?;
                let p = candidate.p();
                if p > max_p {
                    max_p = p;
                    max_id = candidate.pdg_id;
                }

                let (matches, containing, best) = match Species::from_pdg_id(candidate.pdg_id) {
                    Species::Electron => (
                        electrons.matches,
                        &mut electrons.identity.composite_index,
                        &mut best_electron,
                    ),
                    Species::Muon => (
                        muons.matches,
                        &mut muons.identity.composite_index,
                        &mut best_muon,
                    ),
                    Species::Other => continue,
                };
                if let Some(lepton) = matches.lepton_for(id) {
                    if let Some(slot) = containing.get_mut(lepton) {
                        *slot = jet_index as i32;
                    }
                    best.offer(p, lepton);
                }
            }

            result.coarse_id.push(max_id);
            result.best_electron.push(best_electron.index());
            result.best_muon.push(best_muon.index());
        }

        Ok(result)
    }
}

/// Highest-momentum lepton seen in one jet.
struct Best {
    p: f64,
    lepton: Option<usize>,
}

impl Best {
    fn new() -> Self {
        Self {
            p: f64::NEG_INFINITY,
            lepton: None,
        }
    }

    fn offer(&mut self, p: f64, lepton: usize) {
        if p > self.p {
            self.p = p;
            self.lepton = Some(lepton);
        }
    }

    fn index(&self) -> i32 {
        self.lepton.map_or(-1, |i| i as i32)
    }
}
