//! Simulated pileup interaction summaries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pileup summary for one simulated bunch crossing.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PileupSummary {
    /// Bunch crossing relative to the triggered one (0 = in-time).
    pub bunch_crossing: i32,
    /// Number of pileup interactions generated.
    pub num_interactions: i32,
    /// Mean of the Poisson distribution the count was drawn from.
    pub true_num_interactions: f32,
    /// z-position of each pileup vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub z_positions: Vec<f32>,
    /// Scalar pT sum of low-pT tracks per vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sum_pt_low_pt: Vec<f32>,
    /// Scalar pT sum of high-pT tracks per vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sum_pt_high_pt: Vec<f32>,
    /// Low-pT track count per vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ntrks_low_pt: Vec<i32>,
    /// High-pT track count per vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ntrks_high_pt: Vec<i32>,
}
