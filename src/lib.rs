//! evtable - Per-event lepton/jet association ntupler
//!
//! This crate re-exports all layers of the evtable system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: evtable_runtime    - Config, MessagePack I/O, synthetic events, CLI
//! Layer 2: evtable_engine     - Matching, identity, jet and tau attribution
//! Layer 1: evtable_storage    - Event inputs, candidate pool, record sink
//! Layer 0: evtable_foundation - Core types (CandidateId, Kinematics, Error)
//! ```

pub use evtable_engine as engine;
pub use evtable_foundation as foundation;
pub use evtable_runtime as runtime;
pub use evtable_storage as storage;
