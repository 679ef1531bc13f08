//! The fixed set of event filter flags written to every row.

use std::fmt;

/// An event-quality filter flag with a dedicated output column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterFlag {
    /// `Flag_trackingFailureFilter`
    TrackingFailure,
    /// `Flag_goodVertices`
    GoodVertices,
    /// `Flag_CSCTightHaloFilter`
    CscTightHalo,
    /// `Flag_trkPOGFilters`
    TrkPog,
    /// `Flag_trkPOG_logErrorTooManyClusters`
    TrkPogLogErrorTooManyClusters,
    /// `Flag_EcalDeadCellTriggerPrimitiveFilter`
    EcalDeadCellTriggerPrimitive,
    /// `Flag_ecalLaserCorrFilter`
    EcalLaserCorr,
    /// `Flag_trkPOG_manystripclus53X`
    TrkPogManyStripClus53X,
    /// `Flag_eeBadScFilter`
    EeBadSc,
    /// `Flag_METFilters`
    MetFilters,
    /// `Flag_HBHENoiseFilter`
    HbheNoise,
    /// `Flag_trkPOG_toomanystripclus53X`
    TrkPogTooManyStripClus53X,
    /// `Flag_hcalLaserEventFilter`
    HcalLaserEvent,
}

impl FilterFlag {
    /// Number of flags.
    pub const COUNT: usize = 13;

    /// All flags, in column order.
    pub const ALL: [FilterFlag; Self::COUNT] = [
        Self::TrackingFailure,
        Self::GoodVertices,
        Self::CscTightHalo,
        Self::TrkPog,
        Self::TrkPogLogErrorTooManyClusters,
        Self::EcalDeadCellTriggerPrimitive,
        Self::EcalLaserCorr,
        Self::TrkPogManyStripClus53X,
        Self::EeBadSc,
        Self::MetFilters,
        Self::HbheNoise,
        Self::TrkPogTooManyStripClus53X,
        Self::HcalLaserEvent,
    ];

    /// Name of the filter path in the filter-results list.
    #[must_use]
    pub const fn source_name(self) -> &'static str {
        match self {
            Self::TrackingFailure => "Flag_trackingFailureFilter",
            Self::GoodVertices => "Flag_goodVertices",
            Self::CscTightHalo => "Flag_CSCTightHaloFilter",
            Self::TrkPog => "Flag_trkPOGFilters",
            Self::TrkPogLogErrorTooManyClusters => "Flag_trkPOG_logErrorTooManyClusters",
            Self::EcalDeadCellTriggerPrimitive => "Flag_EcalDeadCellTriggerPrimitiveFilter",
            Self::EcalLaserCorr => "Flag_ecalLaserCorrFilter",
            Self::TrkPogManyStripClus53X => "Flag_trkPOG_manystripclus53X",
            Self::EeBadSc => "Flag_eeBadScFilter",
            Self::MetFilters => "Flag_METFilters",
            Self::HbheNoise => "Flag_HBHENoiseFilter",
            Self::TrkPogTooManyStripClus53X => "Flag_trkPOG_toomanystripclus53X",
            Self::HcalLaserEvent => "Flag_hcalLaserEventFilter",
        }
    }

    /// Name of the output column.
    ///
    /// Column names are kept byte-for-byte compatible with existing ntuples,
    /// including the historical `trackingfailture` spelling.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::TrackingFailure => "trackingfailturefilter_decision",
            Self::GoodVertices => "goodVerticesfilter_decision",
            Self::CscTightHalo => "cschalofilter_decision",
            Self::TrkPog => "trkPOGfilter_decision",
            Self::TrkPogLogErrorTooManyClusters => "trkPOG_logErrorTooManyClustersfilter_decision",
            Self::EcalDeadCellTriggerPrimitive => "EcalDeadCellTriggerPrimitivefilter_decision",
            Self::EcalLaserCorr => "ecallaserfilter_decision",
            Self::TrkPogManyStripClus53X => "trkPOG_manystripclus53Xfilter_decision",
            Self::EeBadSc => "eebadscfilter_decision",
            Self::MetFilters => "METFiltersfilter_decision",
            Self::HbheNoise => "HBHENoisefilter_decision",
            Self::TrkPogTooManyStripClus53X => "trkPOG_toomanystripclus53Xfilter_decision",
            Self::HcalLaserEvent => "hcallaserfilter_decision",
        }
    }

    /// Looks a flag up by its output column name.
    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.column() == column)
    }

    /// Position in [`FilterFlag::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FilterFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}
