//! Trigger path decisions, HLT trigger objects, and the L1 decision word.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One named path and whether it accepted the event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathDecision {
    /// Path name (e.g. `HLT_Mu50_v1`, `Flag_goodVertices`).
    pub name: String,
    /// Accept bit.
    pub accept: bool,
}

impl PathDecision {
    /// Creates a path decision.
    #[must_use]
    pub fn new(name: impl Into<String>, accept: bool) -> Self {
        Self {
            name: name.into(),
            accept,
        }
    }
}

/// An HLT trigger object in packed form.
///
/// Path membership is stored as indices into the event's trigger-name list
/// and must be unpacked against that list before use.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriggerObject {
    /// Label of the HLT collection the object came from.
    pub collection: String,
    /// Momentum x component.
    pub px: f32,
    /// Momentum y component.
    pub py: f32,
    /// Momentum z component.
    pub pz: f32,
    /// Transverse momentum.
    pub pt: f32,
    /// Transverse energy.
    pub et: f32,
    /// Energy.
    pub energy: f32,
    /// Pseudorapidity.
    pub eta: f32,
    /// Azimuth.
    pub phi: f32,
    /// Packed indices into the trigger-name list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub path_indices: Vec<u32>,
}

impl TriggerObject {
    /// Resolves the packed path indices against the trigger-name list.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if any index is out of range.
    pub fn unpack_path_names<'a>(&self, names: &'a [PathDecision]) -> Result<Vec<&'a str>> {
        self.path_indices
            .iter()
            .map(|&index| {
                names
                    .get(index as usize)
                    .map(|path| path.name.as_str())
                    .ok_or_else(|| {
                        Error::malformed(format!(
                            "trigger object in '{}' references path {index} of {}",
                            self.collection,
                            names.len()
                        ))
                    })
            })
            .collect()
    }
}

/// Width of the L1 global decision word.
pub const L1_WORD_BITS: usize = 128;

/// The first-level global trigger decision word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct L1TriggerWord {
    /// Overall L1 accept.
    pub decision: bool,
    /// Per-algorithm decision bits.
    pub bits: Vec<bool>,
}

impl L1TriggerWord {
    /// The substitute used when no L1 record is available: all bits false.
    #[must_use]
    pub fn null(width: usize) -> Self {
        Self {
            decision: false,
            bits: vec![false; width],
        }
    }

    /// Indices of the set bits.
    pub fn set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
    }
}
