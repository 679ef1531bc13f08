//! Lepton lookup for single-prong taus.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use evtable_foundation::{CompositeObject, Result, Species};
use evtable_storage::CandidatePool;

use crate::matcher::LeptonMatches;

/// Lepton indices for each tau.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TauLeptons {
    /// Electron behind each single-prong tau, or -1.
    pub electron: Vec<i32>,
    /// Muon behind each single-prong tau, or -1.
    pub muon: Vec<i32>,
}

/// Resolves taus with exactly one constituent to the lepton sharing it.
///
/// Multi-prong taus are left unresolved.
#[derive(Clone, Copy, Debug, Default)]
pub struct TauOverlapResolver;

impl TauOverlapResolver {
    /// Creates the resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolves every tau.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if a constituent id does not
    /// resolve in the pool.
    pub fn resolve(
        &self,
        pool: CandidatePool<'_>,
        taus: &[CompositeObject],
        electrons: &LeptonMatches,
        muons: &LeptonMatches,
    ) -> Result<TauLeptons> {
        let mut result = TauLeptons {
            electron: vec![-1; taus.len()],
            muon: vec![-1; taus.len()],
        };

        for (tau_index, tau) in taus.iter().enumerate() {
            for &id in &tau.constituents {
                pool.get(id)?;
            }
            let Some(id) = tau.sole_constituent() else {
                continue;
            };
            let (matches, slot) = match Species::from_pdg_id(pool.get(id)?.pdg_id) {
                Species::Electron => (electrons, &mut result.electron[tau_index]),
                Species::Muon => (muons, &mut result.muon[tau_index]),
                Species::Other => continue,
            };
            if let Some(lepton) = matches.lepton_for(id) {
                *slot = lepton as i32;
            }
        }

        Ok(result)
    }
}
