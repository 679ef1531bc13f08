//! Error types for the evtable system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::candidate::CandidateId;
use crate::event::EventId;

/// The main error type for evtable operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, keeping any fields already recorded.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(match self.context.take() {
            Some(existing) => existing.merge(context),
            None => context,
        });
        self
    }

    /// Creates a missing collection error for the given input label.
    #[must_use]
    pub fn missing_collection(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCollection {
            label: label.into(),
        })
    }

    /// Creates a malformed association error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedAssociation(message.into()))
    }

    /// Creates an error for a candidate id that does not resolve in the pool.
    #[must_use]
    pub fn dangling_candidate(id: CandidateId, pool_size: usize) -> Self {
        Self::malformed(format!(
            "candidate reference {id} does not resolve (pool has {pool_size} candidates)"
        ))
    }

    /// Returns true if this error means a required input was absent.
    #[must_use]
    pub fn is_missing_collection(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingCollection { .. })
    }

    /// Returns true if this error is an association invariant violation.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedAssociation(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required input collection is absent for the event.
    #[error("missing collection: {label}")]
    MissingCollection {
        /// The input label that could not be resolved.
        label: String,
    },

    /// Association invariant violated (empty pool, dangling ids, ...).
    #[error("malformed association: {0}")]
    MalformedAssociation(String),

    /// A row was flushed before the column layout was registered.
    #[error("row schema not registered before first flush")]
    SchemaNotRegistered,

    /// Encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Sequence number of the event in this run (1-based).
    pub event_number: Option<u64>,
    /// Run/lumi/event id of the failing event.
    pub event_id: Option<EventId>,
    /// Pipeline stage that failed.
    pub stage: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event sequence number.
    #[must_use]
    pub fn with_event_number(mut self, number: u64) -> Self {
        self.event_number = Some(number);
        self
    }

    /// Sets the event id.
    #[must_use]
    pub fn with_event_id(mut self, id: EventId) -> Self {
        self.event_id = Some(id);
        self
    }

    /// Sets the pipeline stage.
    #[must_use]
    pub fn with_stage(mut self, stage: &'static str) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Fills unset fields of `self` from `other`.
    fn merge(self, other: ErrorContext) -> Self {
        Self {
            event_number: self.event_number.or(other.event_number),
            event_id: self.event_id.or(other.event_id),
            stage: self.stage.or(other.stage),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(number) = self.event_number {
            write!(f, "event #{number}")?;
            wrote = true;
        }
        if let Some(id) = &self.event_id {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "({id})")?;
            wrote = true;
        }
        if let Some(stage) = self.stage {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "in {stage}")?;
        }
        Ok(())
    }
}

/// Result type alias for evtable operations.
pub type Result<T> = std::result::Result<T, Error>;
