//! Error types for Lockstep

use thiserror::Error;

/// Boxed error produced by user callbacks and custom sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for Lockstep evaluations.
///
/// Every variant aborts the whole evaluation: no partial result tuple is
/// ever produced alongside an error.
#[derive(Debug, Error)]
pub enum LockstepError {
    /// Invalid request or evaluation configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source could not open its iteration session
    #[error("Source error: {0}")]
    Source(#[source] BoxError),

    /// Checked accumulation exceeded the range of the numeric type
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Name of the consumer operation that overflowed.
        operation: &'static str,
    },

    /// A selector, predicate, fold or stream transform failed
    #[error("Callback failed: {0}")]
    Callback(#[source] BoxError),

    /// A push-stream stage signalled an error
    #[error("Stream error: {0}")]
    Stream(String),

    /// A stream bridge completed without its derived stream emitting a value
    #[error("Derived stream completed without emitting a value")]
    NoValue,
}

impl LockstepError {
    /// Wraps a user callback failure.
    pub fn callback(error: impl Into<BoxError>) -> Self {
        Self::Callback(error.into())
    }

    /// Wraps a source acquisition failure.
    pub fn source(error: impl Into<BoxError>) -> Self {
        Self::Source(error.into())
    }

    /// Returns an owned copy with the same variant and message.
    ///
    /// Boxed sources are flattened to their display text, so the copy's
    /// `source()` chain ends one level earlier than the original's.
    pub fn replicate(&self) -> Self {
        match self {
            Self::Config(message) => Self::Config(message.clone()),
            Self::Source(error) => Self::Source(error.to_string().into()),
            Self::Overflow { operation } => Self::Overflow {
                operation: *operation,
            },
            Self::Callback(error) => Self::Callback(error.to_string().into()),
            Self::Stream(message) => Self::Stream(message.clone()),
            Self::NoValue => Self::NoValue,
        }
    }

    /// Returns a short, stable label for the error kind.
    ///
    /// Used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Source(_) => "source",
            Self::Overflow { .. } => "overflow",
            Self::Callback(_) => "callback",
            Self::Stream(_) => "stream",
            Self::NoValue => "no_value",
        }
    }
}

/// Result type alias for Lockstep operations
pub type Result<T> = std::result::Result<T, LockstepError>;
