//! Error types for message formatting.

use thiserror::Error;

/// Errors raised when a formatting operation receives invalid arguments.
///
/// Every operation checks its arguments before building any output, so a
/// failed call has no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A required argument, or an element of a required collection, was absent.
    ///
    /// `parameter` names the argument, e.g. `message` or `properties[2]`.
    #[error("[{parameter}] is required")]
    MissingValue { parameter: String },

    /// An argument was present but its content is not acceptable.
    #[error("[{parameter}] {reason}")]
    InvalidValue { parameter: String, reason: String },
}

impl TextError {
    /// The name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            TextError::MissingValue { parameter } => parameter,
            TextError::InvalidValue { parameter, .. } => parameter,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextError>;
