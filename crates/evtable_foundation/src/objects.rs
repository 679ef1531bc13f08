//! Higher-level physics objects built from candidates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateId;
use crate::kinematics::{Kinematics, Momentum};

/// An electron-like or muon-like lepton.
///
/// `source_candidates` is the lepton's own provenance link into the
/// candidate pool. Muons typically carry exactly one; electrons may carry
/// none, so they are associated geometrically instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lepton {
    /// Signed species id.
    pub pdg_id: i32,
    /// Momentum and direction.
    pub kinematics: Kinematics,
    /// Candidates this lepton was reconstructed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_candidates: Vec<CandidateId>,
}

impl Lepton {
    /// Creates a lepton with no source links.
    #[must_use]
    pub fn new(pdg_id: i32, kinematics: Kinematics) -> Self {
        Self {
            pdg_id,
            kinematics,
            source_candidates: Vec::new(),
        }
    }

    /// Adds a source candidate link.
    #[must_use]
    pub fn with_source(mut self, id: CandidateId) -> Self {
        self.source_candidates.push(id);
        self
    }
}

impl Momentum for Lepton {
    fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }
}

/// A jet or tau: an object whose value derives from constituent candidates.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompositeObject {
    /// Momentum and direction of the composite as a whole.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kinematics: Kinematics,
    /// Ordered constituent candidates.
    pub constituents: Vec<CandidateId>,
}

impl CompositeObject {
    /// Creates a composite from its constituents.
    #[must_use]
    pub fn new(constituents: Vec<CandidateId>) -> Self {
        Self {
            kinematics: Kinematics::default(),
            constituents,
        }
    }

    /// Sets the composite's own kinematics.
    #[must_use]
    pub fn with_kinematics(mut self, kinematics: Kinematics) -> Self {
        self.kinematics = kinematics;
        self
    }

    /// Returns the single constituent, if there is exactly one.
    #[must_use]
    pub fn sole_constituent(&self) -> Option<CandidateId> {
        match self.constituents.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl Momentum for CompositeObject {
    fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }
}
