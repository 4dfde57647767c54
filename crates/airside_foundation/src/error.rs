//! Error types for the Airside system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::placetype::Placetype;
use crate::record::RecordId;

/// Result type alias using the Airside [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Airside operations.
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

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating the context if needed.
    ///
    /// Frames are pushed innermost first, so the last frame names the
    /// outermost operation.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a record not found error.
    #[must_use]
    pub fn record_not_found(id: RecordId) -> Self {
        Self::new(ErrorKind::RecordNotFound(id))
    }

    /// Creates a missing property error.
    #[must_use]
    pub fn missing_property(id: RecordId, property: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingProperty {
            id,
            property: property.into(),
        })
    }

    /// Creates an unrecognized controlled-vocabulary value error.
    #[must_use]
    pub fn unrecognized_value(
        id: RecordId,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnrecognizedValue {
            id,
            property: property.into(),
            value: value.into(),
        })
    }

    /// Creates an invalid property error.
    #[must_use]
    pub fn invalid_property(
        id: RecordId,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidProperty {
            id,
            property: property.into(),
            reason: reason.into(),
        })
    }

    /// Creates a lookup not found error.
    #[must_use]
    pub fn not_found(placetype: Placetype, code: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            placetype,
            code: code.into(),
        })
    }

    /// Creates a multiple candidates error.
    #[must_use]
    pub fn multiple_candidates(placetype: Placetype, code: impl Into<String>) -> Self {
        Self::new(ErrorKind::MultipleCandidates {
            placetype,
            code: code.into(),
        })
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates an I/O error with a description of what was being attempted.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Returns true if this is a lookup [`ErrorKind::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    /// Returns true if this is a lookup [`ErrorKind::MultipleCandidates`].
    #[must_use]
    pub fn is_multiple_candidates(&self) -> bool {
        matches!(self.kind, ErrorKind::MultipleCandidates { .. })
    }

    /// Returns the queried code for lookup errors.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::NotFound { code, .. } | ErrorKind::MultipleCandidates { code, .. } => {
                Some(code)
            }
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    // -------------------------------------------------------------------------
    // Data integrity
    // -------------------------------------------------------------------------
    /// The record store has no document for this id.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// A required property is absent from a record.
    #[error("missing {property} property for record {id}")]
    MissingProperty {
        /// The record that was inspected.
        id: RecordId,
        /// The property that was expected.
        property: String,
    },

    /// A controlled-vocabulary property holds a value outside the vocabulary.
    #[error("unrecognized {property} '{value}' for record {id}")]
    UnrecognizedValue {
        /// The record that was inspected.
        id: RecordId,
        /// The property holding the value.
        property: String,
        /// The unrecognized value.
        value: String,
    },

    /// A property is present but cannot be interpreted.
    #[error("invalid {property} property for record {id}: {reason}")]
    InvalidProperty {
        /// The record that was inspected.
        id: RecordId,
        /// The offending property.
        property: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A record carries no `mz:is_current` flag.
    #[error("missing mz:is_current property for record {0}")]
    MissingCurrencyFlag(RecordId),

    /// A placetype label outside the known schema.
    #[error("unknown placetype: {0}")]
    UnknownPlacetype(String),

    // -------------------------------------------------------------------------
    // Ambiguity
    // -------------------------------------------------------------------------
    /// A record is superseded by more than one successor.
    #[error("multiple successors for record {id}: {candidates:?}")]
    AmbiguousSupersession {
        /// The record with several successors.
        id: RecordId,
        /// The successors found.
        candidates: Vec<RecordId>,
    },

    /// Following supersession edges revisited a record or ran past the depth bound.
    #[error("supersession cycle at record {id} (after {} steps)", .chain.len())]
    CycleDetected {
        /// The record at which the walk stopped.
        id: RecordId,
        /// The records visited before stopping, seed first.
        chain: Vec<RecordId>,
    },

    /// More than one record matches a code.
    #[error("Multiple candidates for {} '{code}'", .placetype.noun())]
    MultipleCandidates {
        /// The kind of record that was queried.
        placetype: Placetype,
        /// The queried code.
        code: String,
    },

    // -------------------------------------------------------------------------
    // Not found
    // -------------------------------------------------------------------------
    /// No record matches a code.
    #[error("{} '{code}' not found", .placetype.title())]
    NotFound {
        /// The kind of record that was queried.
        placetype: Placetype,
        /// The queried code.
        code: String,
    },

    // -------------------------------------------------------------------------
    // Input and upstream
    // -------------------------------------------------------------------------
    /// An EDTF string could not be parsed.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A lookup URI could not be interpreted.
    #[error("invalid lookup URI: {0}")]
    InvalidUri(String),

    /// File system or stream failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// A document or dataset could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A remote dataset could not be fetched.
    #[error("remote error: {0}")]
    Remote(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The record being processed.
    pub id: Option<RecordId>,
    /// The placetype being processed.
    pub placetype: Option<Placetype>,
    /// Operation frames, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record being processed.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the placetype being processed.
    #[must_use]
    pub fn with_placetype(mut self, placetype: Placetype) -> Self {
        self.placetype = Some(placetype);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.placetype, self.id) {
            (Some(pt), Some(id)) => write!(f, "at {pt} {id}")?,
            (None, Some(id)) => write!(f, "at record {id}")?,
            (Some(pt), None) => write!(f, "at {pt}")?,
            (None, None) => {}
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
