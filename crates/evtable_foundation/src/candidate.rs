//! Particle-flow candidates and their per-event identifiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kinematics::{Kinematics, Momentum};

/// Per-event candidate identifier: the candidate's position in the pool.
///
/// Two mentions of "the same candidate" compare by id, never by value;
/// candidates with identical kinematics stay distinct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CandidateId(u32);

impl CandidateId {
    /// Creates a candidate id from a pool position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns a sentinel value representing "no candidate".
    ///
    /// This uses `u32::MAX`, which is never a valid pool position.
    #[must_use]
    pub const fn null() -> Self {
        Self(u32::MAX)
    }

    /// Returns true if this is the null sentinel value.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == u32::MAX
    }

    /// Returns the pool position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "CandidateId(null)")
        } else {
            write!(f, "CandidateId({})", self.0)
        }
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "pf(null)")
        } else {
            write!(f, "pf#{}", self.0)
        }
    }
}

/// A reconstructed particle-flow candidate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Signed species id (PDG convention: type and charge).
    pub pdg_id: i32,
    /// Momentum and direction.
    pub kinematics: Kinematics,
}

impl Candidate {
    /// Creates a candidate.
    #[must_use]
    pub const fn new(pdg_id: i32, kinematics: Kinematics) -> Self {
        Self { pdg_id, kinematics }
    }
}

impl Momentum for Candidate {
    fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }
}
