//! Cross-collection association and extraction for evtable.
//!
//! This crate provides:
//! - [`CandidateMatcher`] - Geometric lepton-to-candidate matching
//! - [`IdentityClassifier`] - Per-species PF identity
//! - [`CompositeAttributionEngine`] - Jet constituent attribution
//! - [`TauOverlapResolver`] - Single-prong tau lepton lookup
//! - [`FlagExtractor`], [`TriggerExtractor`], [`PileupExtractor`] - Event metadata
//! - [`EventProcessor`] - Runs every stage for one event

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribution;
pub mod config;
pub mod flags;
pub mod identity;
pub mod matcher;
pub mod pileup;
pub mod processor;
pub mod tau;
pub mod trigger;

pub use attribution::{CompositeAttributionEngine, JetAttribution, LeptonTarget};
pub use config::EngineConfig;
pub use flags::FlagExtractor;
pub use identity::{IdentityClassifier, LeptonIdentity};
pub use matcher::{CandidateMatcher, LeptonMatches};
pub use pileup::PileupExtractor;
pub use processor::EventProcessor;
pub use tau::{TauLeptons, TauOverlapResolver};
pub use trigger::TriggerExtractor;
