//! Core trait definition for text extraction backends

use projdesk_core::{DeskError, DocumentKind, Result};
use std::path::Path;

/// Main trait for text extraction backends
///
/// Each backend (PDF, DOCX, XLSX) implements this trait to convert one
/// document format into plain text. Calls are isolated, blocking, one-shot
/// conversions: no retries, no streaming, no cancellation. Backends hold no
/// state beyond the immutable input, so a single instance can serve any
/// number of sequential extractions.
pub trait TextExtractor: Send + Sync {
    /// Get the format this backend handles
    fn kind(&self) -> DocumentKind;

    /// Extract the document's textual content from raw bytes
    ///
    /// # Errors
    /// Returns [`DeskError::ExtractionError`] with the generic per-format
    /// message when the document cannot be parsed. The underlying library
    /// diagnostic is logged at `warn` and never propagated.
    fn extract_bytes(&self, data: &[u8]) -> Result<String>;

    /// Extract the document's textual content from a file path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let data = std::fs::read(path.as_ref()).map_err(DeskError::IoError)?;
        self.extract_bytes(&data)
    }

    /// Check if this backend can handle the given format
    fn can_handle(&self, kind: DocumentKind) -> bool {
        self.kind() == kind
    }
}
