//! Error types for rule and option construction

use thiserror::Error;

/// Errors that can occur while building parser inputs.
///
/// Classification itself never fails; only caller-supplied patterns and
/// options can be rejected.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A caller-supplied pattern is not a valid regular expression
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Parser options could not be read
    #[error("Invalid parser options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type for rule and option construction
pub type Result<T> = std::result::Result<T, ParseError>;
