//! Host-level error types for scriptck.
//!
//! These cover failures around the checker (reading input, decoding the tag
//! stream, command-line usage). Inconsistencies inside a script are never
//! host errors; they are [`crate::ScriptError`] values.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type alias using the scriptck error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for scriptck operations.
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

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a decode error at the given position.
    #[must_use]
    pub fn decode(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Decode {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading the tag source failed.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// The tag source is not a well-formed tag document.
    #[error("malformed tag stream at {line}:{column}: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// Invalid command-line usage.
    #[error("usage: {0}")]
    Usage(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name, or `-` for stdin.
    pub source: Option<String>,
    /// Index of the tag being handled, if any.
    pub tag_index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the tag index.
    #[must_use]
    pub fn with_tag_index(mut self, index: usize) -> Self {
        self.tag_index = Some(index);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(index) = self.tag_index {
            if self.source.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "at tag #{index}")?;
        }
        Ok(())
    }
}
