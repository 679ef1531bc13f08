//! Core ids, kinematics, physics objects, and errors for evtable.
//!
//! This crate provides:
//! - [`CandidateId`] - Per-event candidate identity
//! - [`Kinematics`] and [`delta_r`] - Directions and angular distance
//! - [`Lepton`], [`CompositeObject`] - Objects built from candidates
//! - [`FilterFlag`], [`PathDecision`], [`TriggerObject`] - Trigger inputs
//! - [`ColumnType`] - Output column type descriptors
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod candidate;
pub mod error;
pub mod event;
pub mod flags;
pub mod kinematics;
pub mod objects;
pub mod pileup;
pub mod species;
pub mod trigger;
pub mod types;

pub use candidate::{Candidate, CandidateId};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use event::EventId;
pub use flags::FilterFlag;
pub use kinematics::{Kinematics, Momentum, delta_phi, delta_r, delta_r2};
pub use objects::{CompositeObject, Lepton};
pub use pileup::PileupSummary;
pub use species::{ELECTRON_ID, MUON_ID, Species};
pub use trigger::{L1_WORD_BITS, L1TriggerWord, PathDecision, TriggerObject};
pub use types::ColumnType;
