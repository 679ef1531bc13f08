//! Configuration, event I/O, synthetic events, and the CLI driver for evtable.
//!
//! This crate provides:
//! - [`RunConfig`] - TOML run configuration
//! - [`EventReader`], [`MsgpackRowWriter`] - `MessagePack` event input and row output
//! - [`SyntheticEvents`] - Seeded synthetic event generation
//! - [`run`] - Drive a configured input through the processor

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod run;
pub mod serialize;
pub mod synthetic;

pub use config::{RunConfig, SyntheticConfig};
pub use run::{RunSummary, process_stream, run};
pub use serialize::{
    EventReader, MsgpackRowWriter, create_file, from_bytes, open_file, read_rows, save_events,
    to_bytes, write_events,
};
pub use synthetic::SyntheticEvents;
