//! Per-event orchestration.
//!
//! Each event runs, in order:
//! 1. Candidate matching for electrons and muons
//! 2. Lepton identity
//! 3. Jet attribution and tau resolution
//! 4. Pileup, filter, and trigger extraction
//!
//! and produces one fresh [`EventRecord`]. Any stage error aborts the event.

use evtable_foundation::{Error, ErrorContext, Result};
use evtable_storage::{CandidatePool, CollectionSource, EventRecord, EventRecordSink, RowWriter};
use tracing::{debug, debug_span, warn};

use crate::attribution::{CompositeAttributionEngine, LeptonTarget};
use crate::config::EngineConfig;
use crate::flags::FlagExtractor;
use crate::identity::IdentityClassifier;
use crate::matcher::CandidateMatcher;
use crate::pileup::PileupExtractor;
use crate::tau::TauOverlapResolver;
use crate::trigger::TriggerExtractor;

// =============================================================================
// Stage names
// =============================================================================

const STAGE_INPUTS: &str = "inputs";
const STAGE_MATCHING: &str = "matching";
const STAGE_IDENTITY: &str = "identity";
const STAGE_JETS: &str = "jet-attribution";
const STAGE_TAUS: &str = "tau-resolution";
const STAGE_PILEUP: &str = "pileup";
const STAGE_FILTERS: &str = "filters";
const STAGE_TRIGGERS: &str = "triggers";
const STAGE_TRIGGER_OBJECTS: &str = "trigger-objects";
const STAGE_FLUSH: &str = "flush";

fn at(stage: &'static str) -> impl Fn(Error) -> Error {
    move |e| e.with_context(ErrorContext::new().with_stage(stage))
}

// =============================================================================
// Event Processor
// =============================================================================

/// Runs every association and extraction stage for one event at a time.
#[derive(Clone, Debug)]
pub struct EventProcessor {
    config: EngineConfig,
    matcher: CandidateMatcher,
    classifier: IdentityClassifier,
    attribution: CompositeAttributionEngine,
    taus: TauOverlapResolver,
    flags: FlagExtractor,
    triggers: TriggerExtractor,
    pileup: PileupExtractor,
    event_number: u64,
}

impl Default for EventProcessor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EventProcessor {
    /// Creates a processor with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            classifier: IdentityClassifier::new(&config),
            triggers: TriggerExtractor::new(config.l1_word_bits),
            matcher: CandidateMatcher::new(),
            attribution: CompositeAttributionEngine::new(),
            taus: TauOverlapResolver::new(),
            flags: FlagExtractor::new(),
            pileup: PileupExtractor::new(),
            event_number: 0,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of events seen so far, failed ones included.
    #[must_use]
    pub fn events_processed(&self) -> u64 {
        self.event_number
    }

    /// Builds the output row for one event.
    ///
    /// # Errors
    ///
    /// Returns the first stage error, with the event number, event id, and
    /// failing stage attached.
    pub fn process<S: CollectionSource + ?Sized>(&mut self, source: &S) -> Result<EventRecord> {
        self.event_number += 1;
        let id = source.event_id();
        let _span = debug_span!("event", number = self.event_number, id = %id).entered();

        self.build(source).map_err(|e| {
            e.with_context(
                ErrorContext::new()
                    .with_event_number(self.event_number)
                    .with_event_id(id),
            )
        })
    }

    /// Processes one event and commits its row, or discards it on error.
    ///
    /// # Errors
    ///
    /// Returns the processing or flush error. No row is written for a
    /// failed event.
    pub fn run_event<S, W>(&mut self, source: &S, sink: &mut EventRecordSink<W>) -> Result<()>
    where
        S: CollectionSource + ?Sized,
        W: RowWriter,
    {
        match self.process(source) {
            Ok(record) => {
                sink.fill(record);
                sink.flush().map_err(|e| {
                    e.with_context(
                        ErrorContext::new()
                            .with_event_number(self.event_number)
                            .with_event_id(source.event_id())
                            .with_stage(STAGE_FLUSH),
                    )
                })
            }
            Err(e) => {
                sink.discard();
                warn!(error = %e, context = ?e.context, "event discarded");
                Err(e)
            }
        }
    }

    fn build<S: CollectionSource + ?Sized>(&self, source: &S) -> Result<EventRecord> {
        let candidates = source.candidates().map_err(at(STAGE_INPUTS))?;
        let electrons = source.electrons().map_err(at(STAGE_INPUTS))?;
        let muons = source.muons().map_err(at(STAGE_INPUTS))?;
        let jets = source.jets().map_err(at(STAGE_INPUTS))?;
        let taus = source.taus().map_err(at(STAGE_INPUTS))?;
        let pool = CandidatePool::new(candidates);

        let el_matches = self
            .matcher
            .match_leptons(pool, electrons)
            .map_err(at(STAGE_MATCHING))?;
        let mu_matches = self
            .matcher
            .match_leptons(pool, muons)
            .map_err(at(STAGE_MATCHING))?;
        debug!(
            candidates = pool.len(),
            electrons = electrons.len(),
            muons = muons.len(),
            "matched leptons"
        );

        let mut el_identity = self
            .classifier
            .classify_electrons(pool, electrons, &el_matches)
            .map_err(at(STAGE_IDENTITY))?;
        let mut mu_identity = self
            .classifier
            .classify_muons(pool, muons)
            .map_err(at(STAGE_IDENTITY))?;

        let jet_result = self
            .attribution
            .attribute(
                pool,
                jets,
                &mut LeptonTarget::new(&el_matches, &mut el_identity),
                &mut LeptonTarget::new(&mu_matches, &mut mu_identity),
            )
            .map_err(at(STAGE_JETS))?;
        debug!(jets = jet_result.len(), "attributed jet constituents");

        let tau_result = self
            .taus
            .resolve(pool, taus, &el_matches, &mu_matches)
            .map_err(at(STAGE_TAUS))?;
        debug!(taus = taus.len(), "resolved single-prong taus");

        let mut record = EventRecord::new();
        record.els_is_pf = el_identity.is_pf;
        record.els_jet_ind = el_identity.composite_index;
        record.mus_is_pf = mu_identity.is_pf;
        record.mus_jet_ind = mu_identity.composite_index;
        record.jets_maxpt_id = jet_result.coarse_id;
        record.jets_el_ind = jet_result.best_electron;
        record.jets_mu_ind = jet_result.best_muon;
        record.taus_el_ind = tau_result.electron;
        record.taus_mu_ind = tau_result.muon;

        self.pileup
            .extract(source.is_real_data(), source.pileup(), &mut record)
            .map_err(at(STAGE_PILEUP))?;
        debug!(
            real_data = source.is_real_data(),
            crossings = record.pu_bunch_crossing.len(),
            "extracted pileup"
        );

        match source.filter_results() {
            Ok(results) => record.filters = self.flags.extract(results),
            Err(e) if e.is_missing_collection() && !self.config.require_filter_results => {
                debug!("no filter results, all filters pass");
            }
            Err(e) => return Err(at(STAGE_FILTERS)(e)),
        }

        let paths = source.trigger_results().map_err(at(STAGE_TRIGGERS))?;
        let prescales = source.trigger_prescales().map_err(at(STAGE_TRIGGERS))?;
        self.triggers
            .extract_paths(paths, prescales, &mut record)
            .map_err(at(STAGE_TRIGGERS))?;

        let objects = source
            .trigger_objects()
            .map_err(at(STAGE_TRIGGER_OBJECTS))?;
        self.triggers
            .extract_objects(objects, paths, &mut record)
            .map_err(at(STAGE_TRIGGER_OBJECTS))?;
        debug!(
            paths = paths.len(),
            objects = objects.len(),
            "extracted triggers"
        );

        let l1 = self.triggers.l1_word(source.l1_trigger());
        debug!(l1_accept = l1.decision, "read L1 global decision");

        Ok(record)
    }
}
