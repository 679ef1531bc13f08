//! Deterministic synthetic events.
//!
//! Events are structurally valid: every lepton source link and every jet or
//! tau constituent points into the event's own candidate pool. The same
//! seed always yields the same sequence.

// Pool sizes stay far below u32::MAX.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::f64::consts::PI;

use evtable_foundation::{
    Candidate, CandidateId, CompositeObject, EventId, FilterFlag, Kinematics, L1TriggerWord,
    Lepton, PathDecision, PileupSummary, TriggerObject,
};
use evtable_storage::Event;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SyntheticConfig;

const HADRON_IDS: [i32; 5] = [211, -211, 130, 22, 2112];

const TRIGGER_PATHS: [&str; 5] = [
    "HLT_Ele27_eta2p1_WPLoose_Gsf_v1",
    "HLT_IsoMu20_v2",
    "HLT_Mu17_TrkIsoVVL_Ele12_CaloIdL_TrackIdL_IsoVL_v3",
    "HLT_PFHT800_v2",
    "HLT_PFMET170_NoiseCleaned_v3",
];

const TRIGGER_COLLECTIONS: [&str; 3] = [
    "hltL3MuonCandidates::HLT",
    "hltEgammaCandidates::HLT",
    "hltAK4PFJetsCorrected::HLT",
];

/// Filter names outside the fixed flag set, emitted to exercise skipping.
const EXTRA_FILTERS: [&str; 2] = ["Flag_HBHENoiseIsoFilter", "Flag_chargedHadronTrackResolutionFilter"];

/// Generates events from a seeded `ChaCha8` stream.
#[derive(Clone, Debug)]
pub struct SyntheticEvents {
    rng: ChaCha8Rng,
    config: SyntheticConfig,
    produced: u64,
}

impl SyntheticEvents {
    /// Creates a generator.
    #[must_use]
    pub fn new(config: SyntheticConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            produced: 0,
        }
    }

    /// Number of events produced so far.
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Produces the next event, ignoring the configured event count.
    pub fn generate(&mut self) -> Event {
        self.produced += 1;
        let id = EventId::new(1, (self.produced / 100) as u32 + 1, self.produced);

        let mut candidates: Vec<Candidate> = (0..self.rng.gen_range(1..=self.config.max_hadrons.max(1)))
            .map(|_| {
                let pdg_id = HADRON_IDS[self.rng.gen_range(0..HADRON_IDS.len())];
                Candidate::new(pdg_id, self.kinematics(0.5, 40.0))
            })
            .collect();

        let electrons = self.leptons(11, &mut candidates);
        let muons = self.leptons(13, &mut candidates);
        let n = candidates.len() as u32;

        let jets = (0..self.rng.gen_range(0..=self.config.max_jets))
            .map(|_| {
                let size = self.rng.gen_range(0..=8);
                let constituents = (0..size)
                    .map(|_| CandidateId::new(self.rng.gen_range(0..n)))
                    .collect();
                CompositeObject::new(constituents).with_kinematics(self.kinematics(20.0, 300.0))
            })
            .collect();

        let taus = (0..self.rng.gen_range(0..=self.config.max_taus))
            .map(|_| {
                let size = if self.rng.gen_bool(0.7) { 1 } else { 3 };
                let constituents = (0..size)
                    .map(|_| CandidateId::new(self.rng.gen_range(0..n)))
                    .collect();
                CompositeObject::new(constituents).with_kinematics(self.kinematics(18.0, 120.0))
            })
            .collect();

        let paths: Vec<PathDecision> = TRIGGER_PATHS
            .iter()
            .map(|name| PathDecision::new(*name, self.rng.gen_bool(0.3)))
            .collect();
        let prescales = paths
            .iter()
            .map(|_| [1.0, 1.0, 5.0, 20.0][self.rng.gen_range(0..4)])
            .collect();
        let trigger_objects = self.trigger_objects(paths.len());

        let real_data = self.config.real_data;
        let mut event = Event::empty(id)
            .real_data(real_data)
            .with_candidates(candidates)
            .with_electrons(electrons)
            .with_muons(muons)
            .with_jets(jets)
            .with_taus(taus)
            .with_filter_results(self.filter_results())
            .with_triggers(paths, prescales)
            .with_trigger_objects(trigger_objects);

        if !real_data {
            event = event.with_pileup(self.pileup());
        }
        if self.rng.gen_bool(0.5) {
            event = event.with_l1_trigger(self.l1_word());
        }
        event
    }

    fn kinematics(&mut self, min_pt: f64, max_pt: f64) -> Kinematics {
        Kinematics::from_pt(
            self.rng.gen_range(min_pt..max_pt),
            self.rng.gen_range(-2.5..2.5),
            self.rng.gen_range(-PI..PI),
        )
    }

    /// Leptons of one species, each with its own candidate pushed onto the pool.
    fn leptons(&mut self, species: i32, candidates: &mut Vec<Candidate>) -> Vec<Lepton> {
        (0..self.rng.gen_range(0..=self.config.max_leptons))
            .map(|_| {
                let pdg_id = if self.rng.gen_bool(0.5) { species } else { -species };
                let truth = self.kinematics(5.0, 100.0);
                let id = CandidateId::new(candidates.len() as u32);
                candidates.push(Candidate::new(pdg_id, truth));

                // Small smearing keeps most electrons inside the PF cuts.
                let smear = self.rng.gen_range(0.0..0.08);
                let measured = Kinematics::new(
                    truth.p * (1.0 + self.rng.gen_range(-smear..=smear)),
                    truth.eta + self.rng.gen_range(-smear..=smear),
                    truth.phi,
                );
                let mut lepton = Lepton::new(pdg_id, measured).with_source(id);
                if self.rng.gen_bool(0.1) {
                    let other = self.rng.gen_range(0..candidates.len()) as u32;
                    lepton = lepton.with_source(CandidateId::new(other));
                }
                lepton
            })
            .collect()
    }

    fn filter_results(&mut self) -> Vec<PathDecision> {
        let mut results = Vec::with_capacity(FilterFlag::COUNT + EXTRA_FILTERS.len());
        for flag in FilterFlag::ALL {
            // Some flags are left out so their passing default shows up.
            if self.rng.gen_bool(0.9) {
                results.push(PathDecision::new(flag.source_name(), self.rng.gen_bool(0.97)));
            }
        }
        for name in EXTRA_FILTERS {
            results.push(PathDecision::new(name, self.rng.gen_bool(0.5)));
        }
        results
    }

    fn trigger_objects(&mut self, path_count: usize) -> Vec<TriggerObject> {
        (0..self.rng.gen_range(0..=4))
            .map(|_| {
                let collection = TRIGGER_COLLECTIONS[self.rng.gen_range(0..TRIGGER_COLLECTIONS.len())];
                let k = self.kinematics(10.0, 150.0);
                let pt = k.pt();
                let (px, py, pz) = (pt * k.phi.cos(), pt * k.phi.sin(), pt * k.eta.sinh());
                let path_indices = (0..self.rng.gen_range(0..=2.min(path_count)))
                    .map(|_| self.rng.gen_range(0..path_count) as u32)
                    .collect();
                TriggerObject {
                    collection: collection.to_string(),
                    px: px as f32,
                    py: py as f32,
                    pz: pz as f32,
                    pt: pt as f32,
                    et: pt as f32,
                    energy: k.p as f32,
                    eta: k.eta as f32,
                    phi: k.phi as f32,
                    path_indices,
                }
            })
            .collect()
    }

    fn pileup(&mut self) -> Vec<PileupSummary> {
        (-1..=1)
            .map(|bunch_crossing| {
                let vertices = self.rng.gen_range(5..40_usize);
                let num_interactions = vertices as i32;
                PileupSummary {
                    bunch_crossing,
                    num_interactions,
                    true_num_interactions: self.rng.gen_range(5.0..40.0),
                    z_positions: (0..vertices).map(|_| self.rng.gen_range(-15.0..15.0)).collect(),
                    sum_pt_low_pt: (0..vertices).map(|_| self.rng.gen_range(0.0..5.0)).collect(),
                    sum_pt_high_pt: (0..vertices).map(|_| self.rng.gen_range(0.0..30.0)).collect(),
                    ntrks_low_pt: (0..vertices).map(|_| self.rng.gen_range(0..10)).collect(),
                    ntrks_high_pt: (0..vertices).map(|_| self.rng.gen_range(0..4)).collect(),
                }
            })
            .collect()
    }

    fn l1_word(&mut self) -> L1TriggerWord {
        let bits: Vec<bool> = (0..evtable_foundation::L1_WORD_BITS)
            .map(|_| self.rng.gen_bool(0.05))
            .collect();
        L1TriggerWord {
            decision: bits.iter().any(|&b| b),
            bits,
        }
    }
}

impl Iterator for SyntheticEvents {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        match self.config.events {
            Some(limit) if self.produced >= limit => None,
            _ => Some(self.generate()),
        }
    }
}
