//! Engine thresholds and behaviour switches.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use evtable_foundation::L1_WORD_BITS;

/// Configuration shared by every stage of the event processor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// An electron is PF only if its matched candidate lies closer than this in ΔR.
    pub electron_max_delta_r: f64,
    /// An electron is PF only if `|p_lep - p_pf| / p_lep` is below this.
    pub electron_max_rel_dp: f64,
    /// Width of the substitute L1 word when the readout is absent.
    pub l1_word_bits: usize,
    /// Fail the event if the filter-results list is absent. When false an
    /// absent list leaves every filter at its passing default.
    pub require_filter_results: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            electron_max_delta_r: 0.1,
            electron_max_rel_dp: 0.05,
            l1_word_bits: L1_WORD_BITS,
            require_filter_results: true,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the electron ΔR threshold.
    #[must_use]
    pub fn with_electron_max_delta_r(mut self, value: f64) -> Self {
        self.electron_max_delta_r = value;
        self
    }

    /// Sets the electron relative momentum threshold.
    #[must_use]
    pub fn with_electron_max_rel_dp(mut self, value: f64) -> Self {
        self.electron_max_rel_dp = value;
        self
    }

    /// Sets the substitute L1 word width.
    #[must_use]
    pub fn with_l1_word_bits(mut self, bits: usize) -> Self {
        self.l1_word_bits = bits;
        self
    }

    /// Sets whether an absent filter-results list is fatal.
    #[must_use]
    pub fn with_require_filter_results(mut self, required: bool) -> Self {
        self.require_filter_results = required;
        self
    }
}
