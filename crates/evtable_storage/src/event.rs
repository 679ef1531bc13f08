//! Per-event input collections and the interface the engine reads them through.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use evtable_foundation::{
    Candidate, CompositeObject, Error, EventId, L1TriggerWord, Lepton, PathDecision,
    PileupSummary, Result, TriggerObject,
};

/// Input labels of the collections an event is assembled from.
pub mod labels {
    /// Particle-flow candidate pool.
    pub const CANDIDATES: &str = "packedPFCandidates";
    /// Electron collection.
    pub const ELECTRONS: &str = "slimmedElectrons";
    /// Muon collection.
    pub const MUONS: &str = "slimmedMuons";
    /// Jet collection.
    pub const JETS: &str = "slimmedJets";
    /// Tau collection.
    pub const TAUS: &str = "slimmedTaus";
    /// Filter decisions (process-scoped trigger results).
    pub const FILTER_RESULTS: &str = "TriggerResults::PAT";
    /// HLT path decisions.
    pub const TRIGGER_RESULTS: &str = "TriggerResults::HLT";
    /// HLT prescales, parallel to the path decisions.
    pub const TRIGGER_PRESCALES: &str = "patTrigger";
    /// HLT trigger objects.
    pub const TRIGGER_OBJECTS: &str = "selectedPatTrigger";
    /// Simulated pileup summaries.
    pub const PILEUP: &str = "addPileupInfo";
    /// L1 global trigger readout.
    pub const L1_TRIGGER: &str = "gtDigis::HLT";
}

/// Supplies one event's input collections.
///
/// Required collections fail with a missing collection error when absent;
/// optional ones return `None`.
pub trait CollectionSource {
    /// Run/lumi/event id.
    fn event_id(&self) -> EventId;

    /// True for collision data, false for simulation.
    fn is_real_data(&self) -> bool;

    /// Particle-flow candidate pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn candidates(&self) -> Result<&[Candidate]>;

    /// Electron collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn electrons(&self) -> Result<&[Lepton]>;

    /// Muon collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn muons(&self) -> Result<&[Lepton]>;

    /// Jet collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn jets(&self) -> Result<&[CompositeObject]>;

    /// Tau collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn taus(&self) -> Result<&[CompositeObject]>;

    /// Named filter decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn filter_results(&self) -> Result<&[PathDecision]>;

    /// Named trigger path decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn trigger_results(&self) -> Result<&[PathDecision]>;

    /// Prescale per trigger path, parallel to [`Self::trigger_results`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn trigger_prescales(&self) -> Result<&[f32]>;

    /// HLT trigger objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is absent.
    fn trigger_objects(&self) -> Result<&[TriggerObject]>;

    /// Pileup summaries; only produced for simulation.
    fn pileup(&self) -> Option<&[PileupSummary]>;

    /// L1 global decision word, if the readout is available.
    fn l1_trigger(&self) -> Option<&L1TriggerWord>;
}

/// An owned event: every input collection, each possibly absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    /// Run/lumi/event id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: EventId,
    /// True for collision data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_real_data: bool,
    /// Particle-flow candidates.
    pub candidates: Option<Vec<Candidate>>,
    /// Electrons.
    pub electrons: Option<Vec<Lepton>>,
    /// Muons.
    pub muons: Option<Vec<Lepton>>,
    /// Jets.
    pub jets: Option<Vec<CompositeObject>>,
    /// Taus.
    pub taus: Option<Vec<CompositeObject>>,
    /// Filter decisions.
    pub filter_results: Option<Vec<PathDecision>>,
    /// HLT path decisions.
    pub trigger_results: Option<Vec<PathDecision>>,
    /// HLT prescales.
    pub trigger_prescales: Option<Vec<f32>>,
    /// HLT trigger objects.
    pub trigger_objects: Option<Vec<TriggerObject>>,
    /// Pileup summaries.
    pub pileup: Option<Vec<PileupSummary>>,
    /// L1 decision word.
    pub l1_trigger: Option<L1TriggerWord>,
}

impl Event {
    /// Creates an event with every collection absent.
    #[must_use]
    pub fn new(id: EventId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Creates an event with every required collection present but empty.
    #[must_use]
    pub fn empty(id: EventId) -> Self {
        Self {
            id,
            candidates: Some(Vec::new()),
            electrons: Some(Vec::new()),
            muons: Some(Vec::new()),
            jets: Some(Vec::new()),
            taus: Some(Vec::new()),
            filter_results: Some(Vec::new()),
            trigger_results: Some(Vec::new()),
            trigger_prescales: Some(Vec::new()),
            trigger_objects: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Marks the event as collision data.
    #[must_use]
    pub fn real_data(mut self, is_real: bool) -> Self {
        self.is_real_data = is_real;
        self
    }

    /// Sets the candidate pool.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Sets the electrons.
    #[must_use]
    pub fn with_electrons(mut self, electrons: Vec<Lepton>) -> Self {
        self.electrons = Some(electrons);
        self
    }

    /// Sets the muons.
    #[must_use]
    pub fn with_muons(mut self, muons: Vec<Lepton>) -> Self {
        self.muons = Some(muons);
        self
    }

    /// Sets the jets.
    #[must_use]
    pub fn with_jets(mut self, jets: Vec<CompositeObject>) -> Self {
        self.jets = Some(jets);
        self
    }

    /// Sets the taus.
    #[must_use]
    pub fn with_taus(mut self, taus: Vec<CompositeObject>) -> Self {
        self.taus = Some(taus);
        self
    }

    /// Sets the filter decisions.
    #[must_use]
    pub fn with_filter_results(mut self, filters: Vec<PathDecision>) -> Self {
        self.filter_results = Some(filters);
        self
    }

    /// Sets the trigger decisions and their prescales.
    #[must_use]
    pub fn with_triggers(mut self, paths: Vec<PathDecision>, prescales: Vec<f32>) -> Self {
        self.trigger_results = Some(paths);
        self.trigger_prescales = Some(prescales);
        self
    }

    /// Sets the trigger objects.
    #[must_use]
    pub fn with_trigger_objects(mut self, objects: Vec<TriggerObject>) -> Self {
        self.trigger_objects = Some(objects);
        self
    }

    /// Sets the pileup summaries.
    #[must_use]
    pub fn with_pileup(mut self, pileup: Vec<PileupSummary>) -> Self {
        self.pileup = Some(pileup);
        self
    }

    /// Sets the L1 word.
    #[must_use]
    pub fn with_l1_trigger(mut self, word: L1TriggerWord) -> Self {
        self.l1_trigger = Some(word);
        self
    }
}

fn required<'a, T>(collection: Option<&'a Vec<T>>, label: &str) -> Result<&'a [T]> {
    collection
        .map(Vec::as_slice)
        .ok_or_else(|| Error::missing_collection(label))
}

impl CollectionSource for Event {
    fn event_id(&self) -> EventId {
        self.id
    }

    fn is_real_data(&self) -> bool {
        self.is_real_data
    }

    fn candidates(&self) -> Result<&[Candidate]> {
        required(self.candidates.as_ref(), labels::CANDIDATES)
    }

    fn electrons(&self) -> Result<&[Lepton]> {
        required(self.electrons.as_ref(), labels::ELECTRONS)
    }

    fn muons(&self) -> Result<&[Lepton]> {
        required(self.muons.as_ref(), labels::MUONS)
    }

    fn jets(&self) -> Result<&[CompositeObject]> {
        required(self.jets.as_ref(), labels::JETS)
    }

    fn taus(&self) -> Result<&[CompositeObject]> {
        required(self.taus.as_ref(), labels::TAUS)
    }

    fn filter_results(&self) -> Result<&[PathDecision]> {
        required(self.filter_results.as_ref(), labels::FILTER_RESULTS)
    }

    fn trigger_results(&self) -> Result<&[PathDecision]> {
        required(self.trigger_results.as_ref(), labels::TRIGGER_RESULTS)
    }

    fn trigger_prescales(&self) -> Result<&[f32]> {
        required(self.trigger_prescales.as_ref(), labels::TRIGGER_PRESCALES)
    }

    fn trigger_objects(&self) -> Result<&[TriggerObject]> {
        required(self.trigger_objects.as_ref(), labels::TRIGGER_OBJECTS)
    }

    fn pileup(&self) -> Option<&[PileupSummary]> {
        self.pileup.as_deref()
    }

    fn l1_trigger(&self) -> Option<&L1TriggerWord> {
        self.l1_trigger.as_ref()
    }
}
