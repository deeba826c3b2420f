//! Error types for the time-and-attendance hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The taxonomy is deliberately small: punch-data irregularities (stray INs,
//! stray OUTs, negative durations) are never errors. They are reported as
//! [`PunchAnomaly`](crate::models::PunchAnomaly) records alongside normal
//! output. Only genuinely unresolvable configuration raises.

use thiserror::Error;

/// The main error type for the hours engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::MissingPayPeriodType {
///     organization_id: "org_001".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Organization 'org_001' has no pay period type configured"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Neither the organization nor the location defines a pay period type.
    ///
    /// This is the one configuration condition the engine refuses to default,
    /// since downstream payroll correctness depends on the period scheme.
    #[error("Organization '{organization_id}' has no pay period type configured")]
    MissingPayPeriodType {
        /// The organization whose settings were being resolved.
        organization_id: String,
    },

    /// The referenced organization does not exist in the settings source.
    #[error("Organization not found: {id}")]
    OrganizationNotFound {
        /// The organization id that was not found.
        id: String,
    },

    /// The referenced location does not exist in the settings source.
    #[error("Location not found: {id}")]
    LocationNotFound {
        /// The location id that was not found.
        id: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The punch source collaborator failed to produce punch data.
    #[error("Punch source error: {message}")]
    PunchSourceError {
        /// A description of the retrieval failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
