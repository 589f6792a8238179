//! Error types shared across the projdesk crates.
//!
//! This module defines the error enum used by the extraction backends, the
//! backend-service client and the CLI, plus the crate-wide `Result` alias.

use crate::format::DocumentKind;
use thiserror::Error;

/// Error types that can occur across projdesk operations.
///
/// Errors fall into three families:
///
/// - **Configuration** — missing credentials at startup. Fatal; the process
///   exits non-zero.
/// - **Extraction** — a document parse failed. The underlying library
///   diagnostic is logged at the call boundary and replaced with a generic
///   per-format message, so callers never see a raw parser error.
/// - **Backend service** — an HTTP request to the hosted data service failed
///   or returned a non-success status. Never retried; batch operations log
///   the failure and continue with the next row.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Missing or invalid startup configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A document of the given format could not be parsed.
    ///
    /// Carries only the format; the original diagnostic is logged where the
    /// parse failed and is intentionally not part of this error.
    #[error("{}", .0.unreadable_message())]
    ExtractionError(DocumentKind),

    /// The input's format could not be detected or is not supported.
    #[error("unsupported format: {0}")]
    FormatError(String),

    /// File I/O error reading input or writing output.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Transport-level error talking to the hosted backend service.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The backend service answered with a non-success status.
    #[error("backend error: {0}")]
    BackendError(String),
}

/// Type alias for [`Result<T, DeskError>`].
pub type Result<T> = std::result::Result<T, DeskError>;
