//! Per-species decision whether a lepton is a particle-flow candidate.
//!
//! Electrons are judged geometrically against their matched candidate.
//! Muons are judged structurally from their own source link and ignore the
//! geometric match entirely.

use evtable_foundation::{Candidate, Error, Lepton, Momentum, Result, delta_r};
use evtable_storage::CandidatePool;

use crate::config::EngineConfig;
use crate::matcher::LeptonMatches;

/// Identity results for one lepton collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeptonIdentity {
    /// Whether each lepton is faithfully represented by a candidate.
    pub is_pf: Vec<bool>,
    /// Index of the jet containing each lepton, -1 until attributed.
    pub composite_index: Vec<i32>,
}

impl LeptonIdentity {
    fn unattributed(is_pf: Vec<bool>) -> Self {
        let composite_index = vec![-1; is_pf.len()];
        Self {
            is_pf,
            composite_index,
        }
    }

    /// Number of leptons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.is_pf.len()
    }

    /// Returns true if there are no leptons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_pf.is_empty()
    }
}

/// Decides lepton faithfulness.
#[derive(Clone, Copy, Debug)]
pub struct IdentityClassifier {
    max_delta_r: f64,
    max_rel_dp: f64,
}

impl Default for IdentityClassifier {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl IdentityClassifier {
    /// Creates a classifier using the configured electron thresholds.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_delta_r: config.electron_max_delta_r,
            max_rel_dp: config.electron_max_rel_dp,
        }
    }

    /// True if the candidate is a faithful stand-in for the electron.
    #[must_use]
    pub fn is_faithful_electron(&self, electron: &Lepton, candidate: &Candidate) -> bool {
        let rel_dp = (electron.p() - candidate.p()).abs() / electron.p();
        delta_r(electron, candidate) < self.max_delta_r
            && rel_dp < self.max_rel_dp
            && electron.pdg_id == candidate.pdg_id
    }

    /// Classifies electrons against their geometric matches.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if `matches` does not hold one
    /// entry per electron, or if a match or a source link does not resolve
    /// in the pool.
    pub fn classify_electrons(
        &self,
        pool: CandidatePool<'_>,
        electrons: &[Lepton],
        matches: &LeptonMatches,
    ) -> Result<LeptonIdentity> {
        if matches.len() != electrons.len() {
            return Err(Error::malformed(format!(
                "{} matches for {} electrons",
                matches.len(),
                electrons.len()
            )));
        }
        check_sources(pool, electrons)?;
        let is_pf = electrons
            .iter()
            .zip(matches.as_slice())
            .map(|(electron, &id)| {
                pool.get(id)
                    .map(|candidate| self.is_faithful_electron(electron, candidate))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(LeptonIdentity::unattributed(is_pf))
    }

    /// Classifies muons from their source links.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if a source link does not
    /// resolve in the pool.
    pub fn classify_muons(&self, pool: CandidatePool<'_>, muons: &[Lepton]) -> Result<LeptonIdentity> {
        check_sources(pool, muons)?;
        let is_pf = muons
            .iter()
            .map(|muon| match muon.source_candidates.as_slice() {
                [only] => pool.get(*only).map(|source| source.pdg_id == muon.pdg_id),
                _ => Ok(false),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(LeptonIdentity::unattributed(is_pf))
    }
}

fn check_sources(pool: CandidatePool<'_>, leptons: &[Lepton]) -> Result<()> {
    for lepton in leptons {
        for &id in &lepton.source_candidates {
            pool.get(id)?;
        }
    }
    Ok(())
}
