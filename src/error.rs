//! Error types for the Termination Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rule sets or
//! validating caller-supplied data.

use thiserror::Error;

/// The main error type for the Termination Settlement Engine.
///
/// The calculation path itself never fails for well-formed input (missing
/// dates degrade the affected amounts to zero); errors are reserved for
/// rule-set loading and for the caller-side validation helpers.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule file was not found at the specified path.
    #[error("Rule file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A rule file could not be parsed.
    #[error("Failed to parse rule file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule value was semantically invalid (e.g. an unsorted bracket table).
    #[error("Invalid rule '{field}': {message}")]
    InvalidRule {
        /// The rule field that was invalid.
        field: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A termination request was invalid or incomplete.
    #[error("Invalid termination request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
