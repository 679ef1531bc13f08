//! The per-event row sink.
//!
//! The sink owns the row under construction. Stages write into
//! [`EventRecordSink::current_mut`]; [`EventRecordSink::flush`] hands the
//! finished row to a [`RowWriter`] and starts the next one empty.

use evtable_foundation::{Error, ErrorKind, Result};
use tracing::{debug, trace};

use crate::record::EventRecord;
use crate::schema::RowSchema;

/// Destination for finished rows.
pub trait RowWriter {
    /// Declares the column layout. Called once, before the first row.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be written.
    fn register(&mut self, schema: &RowSchema) -> Result<()>;

    /// Writes one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    fn write_row(&mut self, record: &EventRecord) -> Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be written.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Collects rows in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryWriter {
    /// The registered layout, if any.
    pub schema: Option<RowSchema>,
    /// Rows written so far.
    pub rows: Vec<EventRecord>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowWriter for MemoryWriter {
    fn register(&mut self, schema: &RowSchema) -> Result<()> {
        self.schema = Some(schema.clone());
        Ok(())
    }

    fn write_row(&mut self, record: &EventRecord) -> Result<()> {
        self.rows.push(record.clone());
        Ok(())
    }
}

/// Accumulates one event's row and appends it to a [`RowWriter`].
#[derive(Debug)]
pub struct EventRecordSink<W> {
    writer: W,
    schema: RowSchema,
    registered: bool,
    current: EventRecord,
    rows_written: u64,
}

impl<W: RowWriter> EventRecordSink<W> {
    /// Creates a sink for the given layout. Nothing is written until
    /// [`Self::register`] is called.
    pub fn new(writer: W, schema: RowSchema) -> Self {
        Self {
            writer,
            schema,
            registered: false,
            current: EventRecord::default(),
            rows_written: 0,
        }
    }

    /// Declares the column layout to the writer. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or cannot be written.
    pub fn register(&mut self) -> Result<()> {
        if self.registered {
            return Ok(());
        }
        self.schema.validate()?;
        self.writer.register(&self.schema)?;
        self.registered = true;
        debug!(
            table = %self.schema.table,
            columns = self.schema.len(),
            "registered row schema"
        );
        Ok(())
    }

    /// Returns true once the layout has been declared.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// The declared layout.
    #[must_use]
    pub fn schema(&self) -> &RowSchema {
        &self.schema
    }

    /// Replaces the row under construction.
    pub fn fill(&mut self, record: EventRecord) {
        self.current = record;
    }

    /// The row under construction.
    #[must_use]
    pub fn current(&self) -> &EventRecord {
        &self.current
    }

    /// Mutable access to the row under construction.
    pub fn current_mut(&mut self) -> &mut EventRecord {
        &mut self.current
    }

    /// Writes the current row and resets it.
    ///
    /// The row is reset whether or not the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::SchemaNotRegistered`] if [`Self::register`] was
    /// never called, or the writer's error.
    pub fn flush(&mut self) -> Result<()> {
        let record = std::mem::take(&mut self.current);
        if !self.registered {
            return Err(Error::new(ErrorKind::SchemaNotRegistered));
        }
        self.writer.write_row(&record)?;
        self.rows_written += 1;
        trace!(rows = self.rows_written, "row flushed");
        Ok(())
    }

    /// Drops the current row without writing it.
    pub fn discard(&mut self) {
        self.current = EventRecord::default();
    }

    /// Number of rows written.
    #[must_use]
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// The underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Finishes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn finish(mut self) -> Result<W> {
        self.writer.finish()?;
        debug!(rows = self.rows_written, "sink finished");
        Ok(self.writer)
    }

    /// Returns the writer without finishing it.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
