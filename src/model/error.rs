//! Error types for pagesel.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping all domain-specific failures
//!   - [`InputError`] - Script or data file reading failures
//!   - [`ParseError`] - Script line and API payload parsing failures
//!   - [`FetchError`] - Page source could not deliver a page
//!   - [`SelectionError`] - Bulk selection rejected or interrupted
//!   - [`ConfigError`](crate::config::ConfigError) - Configuration loading failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!
//! # Error Recovery Strategy
//!
//! Script parsing errors are **non-fatal**: malformed lines are logged and skipped.
//! Fetch and selection errors abort only the event that raised them; selections already
//! committed stay in place. Input, config and logging errors are fatal.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::PageIndex;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`, so the binary's
/// entry point can propagate everything with `?`.
///
/// # Examples
///
/// ```no_run
/// use pagesel::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _script = read_script()?;
///     Ok(())
/// }
/// # fn read_script() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the session script or the local data file.
    ///
    /// **Recovery**: Fatal. Display the error and exit.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse a script line or an API payload.
    ///
    /// Script lines are normally parsed gracefully; this variant surfaces only when a
    /// caller chooses strict parsing.
    #[error("Failed to parse input: {0}")]
    Parse(#[from] ParseError),

    /// Configuration file exists but could not be read or parsed, or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// A page could not be fetched outside of a bulk selection.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Bulk selection was rejected or interrupted.
    #[error("Selection failed: {0}")]
    Selection(#[from] SelectionError),

    /// Writing the report to stdout failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading the script or a local data file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pagesel::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No script was given and stdin is an interactive terminal.
    #[error("No input source: provide a script path or pipe events to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing script lines or remote payloads.
///
/// Every variant carries the 1-based line number (or page number, for payloads) so the
/// offending input can be located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not valid JSON, or its shape does not match any event.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesel::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 3,
    ///     message: "expected value".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Deserializer message.
        message: String,
    },

    /// The event's `type` tag names no known event.
    #[error("Unknown event type '{kind}' at line {line}")]
    UnknownEvent {
        /// 1-based line number.
        line: usize,
        /// The unrecognized tag.
        kind: String,
    },

    /// A field is present but holds an unusable value (e.g. page 0).
    #[error("Invalid value for '{field}' at line {line}: {reason}")]
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// The offending JSON key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// The page source failed to deliver a page.
///
/// Fetch errors carry strings rather than the underlying transport errors so they can be
/// cloned into logs and test assertions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport error text.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded into a page.
    #[error("Could not decode page {page}: {reason}")]
    Decode {
        /// Page whose payload was malformed.
        page: PageIndex,
        /// Decoder message.
        reason: String,
    },

    /// The source has no way to produce this page (e.g. a scripted failure in tests).
    #[error("Page {page} unavailable: {reason}")]
    Unavailable {
        /// Page that was requested.
        page: PageIndex,
        /// Why it cannot be served.
        reason: String,
    },
}

/// Bulk selection failures.
///
/// Neither variant rolls back pages committed before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The request itself is malformed, e.g. a negative row count. Nothing was mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesel::model::error::SelectionError;
    ///
    /// let err = SelectionError::InvalidArgument {
    ///     name: "count",
    ///     value: -1,
    /// };
    /// assert!(err.to_string().contains("-1"));
    /// ```
    #[error("Invalid argument '{name}': {value} must not be negative")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Fetching `page` failed part way through. Earlier pages keep their new selections.
    #[error("Bulk selection stopped at page {page}: {source}")]
    Fetch {
        /// The page that could not be fetched.
        page: PageIndex,
        /// Underlying fetch failure.
        #[source]
        source: FetchError,
    },
}
