//! Event and row streams in `MessagePack`.
//!
//! Input is a concatenation of named-map encoded [`Event`] values. Output
//! starts with the [`RowSchema`], followed by one named map per
//! [`EventRecord`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use evtable_foundation::{Error, ErrorKind, Result};
use evtable_storage::{Event, EventRecord, RowSchema, RowWriter};
use serde::Serialize;
use serde::de::DeserializeOwned;

fn encode_error(e: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::SerializationError(e.to_string()))
}

fn write_value<W: Write + ?Sized, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    rmp_serde::encode::write_named(writer, value).map_err(encode_error)
}

fn read_value<R: Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    rmp_serde::from_read(reader).map_err(encode_error)
}

/// Opens a file for reading.
///
/// # Errors
///
/// Returns an I/O error naming the path.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<File> {
    File::open(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        )))
    })
}

/// Creates a file for writing, replacing it if it exists.
///
/// # Errors
///
/// Returns an I/O error naming the path.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<File> {
    File::create(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        )))
    })
}

/// Serializes an event to bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(event: &Event) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(event).map_err(encode_error)
}

/// Deserializes an event from bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Event> {
    rmp_serde::from_slice(bytes).map_err(encode_error)
}

// =============================================================================
// Event Stream
// =============================================================================

/// Reads events one at a time until end of input.
#[derive(Debug)]
pub struct EventReader<R> {
    reader: BufReader<R>,
}

impl<R: Read> EventReader<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Reads the next event, or `None` at a clean end of input.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the read fails, or a serialization error if
    /// the input ends mid-event or is not an event.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        let at_end = self
            .reader
            .fill_buf()
            .map_err(|e| Error::new(ErrorKind::IoError(format!("failed to read events: {e}"))))?
            .is_empty();
        if at_end {
            return Ok(None);
        }
        read_value(&mut self.reader).map(Some)
    }
}

impl EventReader<File> {
    /// Opens an event file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        open_file(path).map(Self::new)
    }
}

impl<R: Read> Iterator for EventReader<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}

/// Writes events back to back.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_events<'a, W, I>(writer: W, events: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Event>,
{
    let mut writer = BufWriter::new(writer);
    for event in events {
        write_value(&mut writer, event)?;
    }
    writer
        .flush()
        .map_err(|e| Error::new(ErrorKind::IoError(format!("failed to flush events: {e}"))))
}

/// Saves events to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_events<P: AsRef<Path>>(events: &[Event], path: P) -> Result<()> {
    write_events(create_file(path)?, events)
}

// =============================================================================
// Row Output
// =============================================================================

/// [`RowWriter`] that writes the schema header then one map per row.
#[derive(Debug)]
pub struct MsgpackRowWriter<W: Write> {
    writer: BufWriter<W>,
    rows: u64,
}

impl<W: Write> MsgpackRowWriter<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            rows: 0,
        }
    }

    /// Number of rows written.
    #[must_use]
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flushes and returns the inner writer.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be flushed.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::new(ErrorKind::IoError(format!("failed to flush rows: {e}"))))
    }
}

impl MsgpackRowWriter<File> {
    /// Creates an output file, replacing it if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        create_file(path).map(Self::new)
    }
}

impl<W: Write> RowWriter for MsgpackRowWriter<W> {
    fn register(&mut self, schema: &RowSchema) -> Result<()> {
        write_value(&mut self.writer, schema)
    }

    fn write_row(&mut self, record: &EventRecord) -> Result<()> {
        write_value(&mut self.writer, record)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::new(ErrorKind::IoError(format!("failed to flush rows: {e}"))))
    }
}

/// Reads a row stream back: the schema header and every row.
///
/// # Errors
///
/// Returns an error if the stream is empty or malformed.
pub fn read_rows<R: Read>(reader: R) -> Result<(RowSchema, Vec<EventRecord>)> {
    let mut reader = BufReader::new(reader);
    let schema: RowSchema = read_value(&mut reader)?;
    let mut rows = Vec::new();
    loop {
        let at_end = reader
            .fill_buf()
            .map_err(|e| Error::new(ErrorKind::IoError(format!("failed to read rows: {e}"))))?
            .is_empty();
        if at_end {
            break;
        }
        rows.push(read_value(&mut reader)?);
    }
    Ok((schema, rows))
}
