//! Event inputs, the candidate pool, and the output row sink for evtable.
//!
//! This crate provides:
//! - [`CollectionSource`] and [`Event`] - One event's input collections
//! - [`CandidatePool`] - Id resolution against the candidate collection
//! - [`EventRecord`] - The flat output row
//! - [`EventRecordSink`] - Row accumulation and [`RowWriter`] hand-off

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod event;
pub mod pool;
pub mod record;
pub mod schema;
pub mod sink;

pub use event::{CollectionSource, Event, labels};
pub use pool::CandidatePool;
pub use record::{DEFAULT_TABLE, EventRecord, FilterDecisions};
pub use schema::{ColumnSchema, RowSchema};
pub use sink::{EventRecordSink, MemoryWriter, RowWriter};
