//! Error types for the shift and compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during date/time parsing, on-call
//! splitting, and profile loading.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the shift and compensation engine.
///
/// Parsing and validation errors are raised synchronously by the function that
/// detects them. The monthly aggregation functions are total and never return
/// this type.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "2025/06/02".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid calendar date '2025/06/02': expected YYYY-MM-DD");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A calendar-date string did not match the strict `YYYY-MM-DD` format.
    #[error("Invalid calendar date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The input that failed to parse.
        input: String,
    },

    /// A clock-time string was empty where one is required.
    #[error("Missing clock time")]
    MissingTime,

    /// A clock-time string did not match the `HH:MM` format.
    #[error("Invalid clock time '{input}': expected HH:MM")]
    InvalidTime {
        /// The input that failed to parse.
        input: String,
    },

    /// A time range had no positive duration, or its overnight intent could
    /// not be disambiguated.
    #[error("Invalid time range: {start} to {end}")]
    InvalidTimeRange {
        /// The start of the rejected range.
        start: NaiveTime,
        /// The end of the rejected range.
        end: NaiveTime,
    },

    /// Profile file was not found at the specified path.
    #[error("Profile file not found: {path}")]
    ProfileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Profile file could not be parsed.
    #[error("Failed to parse profile file '{path}': {message}")]
    ProfileParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Profile file could not be written.
    #[error("Failed to write profile file '{path}': {message}")]
    ProfileWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the write error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
