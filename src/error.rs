//! Error types for the Statutory Payroll Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use thiserror::Error;

/// The main error type for the Statutory Payroll Computation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// The engine distinguishes an *absent* configuration value (the expected
/// default case, never an error) from a *present but invalid* one, which is
/// rejected rather than silently corrected.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "annualCTC".to_string(),
///     message: "must be non-negative, got -1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid compensation input field 'annualCTC': must be non-negative, got -1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A statutory configuration field violates its domain constraint.
    #[error("Invalid statutory configuration field '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid, in its persisted naming.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A compensation input field violates its domain constraint.
    #[error("Invalid compensation input field '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A professional-tax slab table file was not found at the specified path.
    #[error("Slab table file not found: {path}")]
    TableFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A professional-tax slab table file could not be parsed.
    #[error("Failed to parse slab table file '{path}': {message}")]
    TableParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
