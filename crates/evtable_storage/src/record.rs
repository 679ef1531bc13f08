//! The structured output row for one event.
//!
//! An [`EventRecord`] is built fresh for every event and handed to the sink,
//! so nothing from a previous event can leak into the next row.

use evtable_foundation::{ColumnType, FilterFlag, PileupSummary, TriggerObject};

use crate::schema::RowSchema;

/// Default name of the output table.
pub const DEFAULT_TABLE: &str = "eventA";

/// Decision of every [`FilterFlag`], stored as 32-bit ints (1 = pass, 0 = fail).
///
/// Every flag starts at 1: a flag absent from the source list passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterDecisions {
    values: [i32; FilterFlag::COUNT],
}

impl Default for FilterDecisions {
    fn default() -> Self {
        Self {
            values: [1; FilterFlag::COUNT],
        }
    }
}

impl FilterDecisions {
    /// All flags passing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the decision for a flag.
    #[must_use]
    pub fn passed(&self, flag: FilterFlag) -> bool {
        self.values[flag.ordinal()] != 0
    }

    /// Returns the stored column value for a flag.
    #[must_use]
    pub fn value(&self, flag: FilterFlag) -> i32 {
        self.values[flag.ordinal()]
    }

    /// Records a decision.
    pub fn set(&mut self, flag: FilterFlag, accept: bool) {
        self.values[flag.ordinal()] = i32::from(accept);
    }

    /// Iterates over `(flag, value)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterFlag, i32)> + '_ {
        FilterFlag::ALL
            .iter()
            .map(move |&flag| (flag, self.values[flag.ordinal()]))
    }

    /// Returns true if every flag passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.values.iter().all(|&v| v != 0)
    }
}

#[cfg(feature = "serde")]
mod filter_serde {
    use std::fmt;

    use serde::de::{IgnoredAny, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{FilterDecisions, FilterFlag};

    impl Serialize for FilterDecisions {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(FilterFlag::COUNT))?;
            for (flag, value) in self.iter() {
                map.serialize_entry(flag.column(), &value)?;
            }
            map.end()
        }
    }

    struct DecisionsVisitor;

    impl<'de> Visitor<'de> for DecisionsVisitor {
        type Value = FilterDecisions;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of filter decision columns")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut decisions = FilterDecisions::default();
            while let Some(key) = map.next_key::<String>()? {
                if let Some(flag) = FilterFlag::from_column(&key) {
                    decisions.values[flag.ordinal()] = map.next_value()?;
                } else {
                    map.next_value::<IgnoredAny>()?;
                }
            }
            Ok(decisions)
        }
    }

    impl<'de> Deserialize<'de> for FilterDecisions {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(DecisionsVisitor)
        }
    }
}

/// One output row: every derived field of one event.
///
/// Field order is serialization order and matches [`EventRecord::schema`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventRecord {
    /// HLT path accept bits.
    pub trigger_decision: Vec<bool>,
    /// HLT path names.
    pub trigger_name: Vec<String>,
    /// HLT path prescales.
    pub trigger_prescalevalue: Vec<f32>,

    /// Trigger object transverse momentum.
    pub standalone_triggerobject_pt: Vec<f32>,
    /// Trigger object px.
    pub standalone_triggerobject_px: Vec<f32>,
    /// Trigger object py.
    pub standalone_triggerobject_py: Vec<f32>,
    /// Trigger object pz.
    pub standalone_triggerobject_pz: Vec<f32>,
    /// Trigger object transverse energy.
    pub standalone_triggerobject_et: Vec<f32>,
    /// Trigger object energy.
    pub standalone_triggerobject_energy: Vec<f32>,
    /// Trigger object azimuth.
    pub standalone_triggerobject_phi: Vec<f32>,
    /// Trigger object pseudorapidity.
    pub standalone_triggerobject_eta: Vec<f32>,
    /// Trigger object collection label.
    pub standalone_triggerobject_collectionname: Vec<String>,

    /// Pileup vertex z-positions per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_zpositions"))]
    pub pu_zpositions: Vec<Vec<f32>>,
    /// Low-pT track pT sums per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_sumpT_lowpT"))]
    pub pu_sumpt_lowpt: Vec<Vec<f32>>,
    /// High-pT track pT sums per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_sumpT_highpT"))]
    pub pu_sumpt_highpt: Vec<Vec<f32>>,
    /// Low-pT track counts per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_ntrks_lowpT"))]
    pub pu_ntrks_lowpt: Vec<Vec<i32>>,
    /// High-pT track counts per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_ntrks_highpT"))]
    pub pu_ntrks_highpt: Vec<Vec<i32>>,
    /// Number of pileup interactions per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_NumInteractions"))]
    pub pu_num_interactions: Vec<i32>,
    /// Bunch crossing ids.
    #[cfg_attr(feature = "serde", serde(rename = "PU_bunchCrossing"))]
    pub pu_bunch_crossing: Vec<i32>,
    /// True number of interactions per bunch crossing.
    #[cfg_attr(feature = "serde", serde(rename = "PU_TrueNumInteractions"))]
    pub pu_true_num_interactions: Vec<f32>,

    /// Filter decisions, one column per flag.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub filters: FilterDecisions,

    /// Electron is-PF flags.
    #[cfg_attr(feature = "serde", serde(rename = "els_isPF"))]
    pub els_is_pf: Vec<bool>,
    /// Muon is-PF flags.
    #[cfg_attr(feature = "serde", serde(rename = "mus_isPF"))]
    pub mus_is_pf: Vec<bool>,

    /// Species id of each jet's highest-momentum constituent.
    #[cfg_attr(feature = "serde", serde(rename = "jets_AK4_maxpt_id"))]
    pub jets_maxpt_id: Vec<i32>,
    /// Index of each jet's highest-momentum muon, or -1.
    #[cfg_attr(feature = "serde", serde(rename = "jets_AK4_mu_ind"))]
    pub jets_mu_ind: Vec<i32>,
    /// Index of each jet's highest-momentum electron, or -1.
    #[cfg_attr(feature = "serde", serde(rename = "jets_AK4_el_ind"))]
    pub jets_el_ind: Vec<i32>,
    /// Index of each single-prong tau's electron, or -1.
    pub taus_el_ind: Vec<i32>,
    /// Index of each single-prong tau's muon, or -1.
    pub taus_mu_ind: Vec<i32>,
    /// Index of the jet containing each electron, or -1.
    pub els_jet_ind: Vec<i32>,
    /// Index of the jet containing each muon, or -1.
    pub mus_jet_ind: Vec<i32>,
}

impl EventRecord {
    /// Creates an empty record with all filters passing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Column layout of the record, in serialization order.
    #[must_use]
    pub fn schema(table: impl Into<String>) -> RowSchema {
        let vec_bool = || ColumnType::vec(ColumnType::Bool);
        let vec_int = || ColumnType::vec(ColumnType::Int);
        let vec_float = || ColumnType::vec(ColumnType::Float);
        let vec_string = || ColumnType::vec(ColumnType::String);

        let mut schema = RowSchema::new(table)
            .with_column("trigger_decision", vec_bool())
            .with_column("trigger_name", vec_string())
            .with_column("trigger_prescalevalue", vec_float())
            .with_column("standalone_triggerobject_pt", vec_float())
            .with_column("standalone_triggerobject_px", vec_float())
            .with_column("standalone_triggerobject_py", vec_float())
            .with_column("standalone_triggerobject_pz", vec_float())
            .with_column("standalone_triggerobject_et", vec_float())
            .with_column("standalone_triggerobject_energy", vec_float())
            .with_column("standalone_triggerobject_phi", vec_float())
            .with_column("standalone_triggerobject_eta", vec_float())
            .with_column("standalone_triggerobject_collectionname", vec_string())
            .with_column("PU_zpositions", ColumnType::vec(vec_float()))
            .with_column("PU_sumpT_lowpT", ColumnType::vec(vec_float()))
            .with_column("PU_sumpT_highpT", ColumnType::vec(vec_float()))
            .with_column("PU_ntrks_lowpT", ColumnType::vec(vec_int()))
            .with_column("PU_ntrks_highpT", ColumnType::vec(vec_int()))
            .with_column("PU_NumInteractions", vec_int())
            .with_column("PU_bunchCrossing", vec_int())
            .with_column("PU_TrueNumInteractions", vec_float());

        for flag in FilterFlag::ALL {
            schema = schema.with_column(flag.column(), ColumnType::Int);
        }

        schema
            .with_column("els_isPF", vec_bool())
            .with_column("mus_isPF", vec_bool())
            .with_column("jets_AK4_maxpt_id", vec_int())
            .with_column("jets_AK4_mu_ind", vec_int())
            .with_column("jets_AK4_el_ind", vec_int())
            .with_column("taus_el_ind", vec_int())
            .with_column("taus_mu_ind", vec_int())
            .with_column("els_jet_ind", vec_int())
            .with_column("mus_jet_ind", vec_int())
    }

    /// Appends one trigger path.
    pub fn push_trigger(&mut self, name: &str, accept: bool, prescale: f32) {
        self.trigger_decision.push(accept);
        self.trigger_name.push(name.to_string());
        self.trigger_prescalevalue.push(prescale);
    }

    /// Appends one HLT trigger object.
    pub fn push_trigger_object(&mut self, object: &TriggerObject) {
        self.standalone_triggerobject_collectionname
            .push(object.collection.clone());
        self.standalone_triggerobject_pt.push(object.pt);
        self.standalone_triggerobject_px.push(object.px);
        self.standalone_triggerobject_py.push(object.py);
        self.standalone_triggerobject_pz.push(object.pz);
        self.standalone_triggerobject_et.push(object.et);
        self.standalone_triggerobject_energy.push(object.energy);
        self.standalone_triggerobject_phi.push(object.phi);
        self.standalone_triggerobject_eta.push(object.eta);
    }

    /// Appends one bunch crossing's pileup summary.
    pub fn push_pileup(&mut self, summary: &PileupSummary) {
        self.pu_num_interactions.push(summary.num_interactions);
        self.pu_bunch_crossing.push(summary.bunch_crossing);
        self.pu_true_num_interactions
            .push(summary.true_num_interactions);
        self.pu_zpositions.push(summary.z_positions.clone());
        self.pu_sumpt_lowpt.push(summary.sum_pt_low_pt.clone());
        self.pu_sumpt_highpt.push(summary.sum_pt_high_pt.clone());
        self.pu_ntrks_lowpt.push(summary.ntrks_low_pt.clone());
        self.pu_ntrks_highpt.push(summary.ntrks_high_pt.clone());
    }

    /// Number of trigger paths recorded.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.trigger_name.len()
    }

    /// Returns true if every variable-length column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trigger_decision.is_empty()
            && self.trigger_name.is_empty()
            && self.trigger_prescalevalue.is_empty()
            && self.standalone_triggerobject_pt.is_empty()
            && self.standalone_triggerobject_px.is_empty()
            && self.standalone_triggerobject_py.is_empty()
            && self.standalone_triggerobject_pz.is_empty()
            && self.standalone_triggerobject_et.is_empty()
            && self.standalone_triggerobject_energy.is_empty()
            && self.standalone_triggerobject_phi.is_empty()
            && self.standalone_triggerobject_eta.is_empty()
            && self.standalone_triggerobject_collectionname.is_empty()
            && self.pu_zpositions.is_empty()
            && self.pu_sumpt_lowpt.is_empty()
            && self.pu_sumpt_highpt.is_empty()
            && self.pu_ntrks_lowpt.is_empty()
            && self.pu_ntrks_highpt.is_empty()
            && self.pu_num_interactions.is_empty()
            && self.pu_bunch_crossing.is_empty()
            && self.pu_true_num_interactions.is_empty()
            && self.els_is_pf.is_empty()
            && self.mus_is_pf.is_empty()
            && self.jets_maxpt_id.is_empty()
            && self.jets_mu_ind.is_empty()
            && self.jets_el_ind.is_empty()
            && self.taus_el_ind.is_empty()
            && self.taus_mu_ind.is_empty()
            && self.els_jet_ind.is_empty()
            && self.mus_jet_ind.is_empty()
    }
}
