//! Coarse particle species derived from signed PDG ids.

use std::fmt;

/// |PDG id| of electrons.
pub const ELECTRON_ID: i32 = 11;
/// |PDG id| of muons.
pub const MUON_ID: i32 = 13;

/// Lepton species the association engine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Electron-like (|id| = 11).
    Electron,
    /// Muon-like (|id| = 13).
    Muon,
    /// Anything else (hadrons, photons, ...).
    Other,
}

impl Species {
    /// Classifies a signed PDG id, ignoring charge.
    #[must_use]
    pub const fn from_pdg_id(pdg_id: i32) -> Self {
        match pdg_id.unsigned_abs() {
            11 => Self::Electron,
            13 => Self::Muon,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electron => write!(f, "electron"),
            Self::Muon => write!(f, "muon"),
            Self::Other => write!(f, "other"),
        }
    }
}
