//! Format router dispatching files to the matching extraction backend
//!
//! `TextConverter` is the only entry point callers need: it inspects a
//! file's declared type or extension and hands the bytes to one of the three
//! backends. Control flow is strictly sequential and single-shot; each call
//! is an independent conversion with no shared state between calls.

use crate::docx::DocxExtractor;
use crate::pdf::PdfExtractor;
use crate::traits::TextExtractor;
use crate::xlsx::XlsxExtractor;
use log::debug;
use projdesk_core::{DeskError, DocumentKind, Result};
use std::path::Path;

/// Routes documents to the extraction backend matching their format
#[derive(Debug, Clone, Copy, Default)]
pub struct TextConverter {
    pdf: PdfExtractor,
    docx: DocxExtractor,
    xlsx: XlsxExtractor,
}

impl TextConverter {
    /// Create a converter with all supported backends registered
    #[inline]
    #[must_use = "creates a converter that should be used for extraction"]
    pub const fn new() -> Self {
        Self {
            pdf: PdfExtractor::new(),
            docx: DocxExtractor::new(),
            xlsx: XlsxExtractor::new(),
        }
    }

    /// Formats this converter can route
    #[must_use]
    pub const fn supported_kinds() -> [DocumentKind; 3] {
        [DocumentKind::Pdf, DocumentKind::Docx, DocumentKind::Xlsx]
    }

    /// Extract text from raw bytes of a known format
    ///
    /// # Errors
    /// Returns the backend's generic extraction error when parsing fails.
    pub fn extract_bytes(&self, kind: DocumentKind, data: &[u8]) -> Result<String> {
        debug!("extracting {kind} document ({} bytes)", data.len());
        match kind {
            DocumentKind::Pdf => self.pdf.extract_bytes(data),
            DocumentKind::Docx => self.docx.extract_bytes(data),
            DocumentKind::Xlsx => self.xlsx.extract_bytes(data),
        }
    }

    /// Extract text from a file, resolving the format from an optional
    /// declared MIME type and the file extension
    ///
    /// # Errors
    /// Returns [`DeskError::FormatError`] when the format cannot be
    /// resolved, an IO error when the file cannot be read, or the backend's
    /// generic extraction error when parsing fails.
    pub fn extract_file_with_mime<P: AsRef<Path>>(
        &self,
        path: P,
        mime: Option<&str>,
    ) -> Result<String> {
        let path = path.as_ref();
        let kind = DocumentKind::detect(mime, path).ok_or_else(|| {
            DeskError::FormatError(format!("cannot determine format of {}", path.display()))
        })?;
        let data = std::fs::read(path)?;
        self.extract_bytes(kind, &data)
    }

    /// Extract text from a file, resolving the format from its extension
    ///
    /// # Errors
    /// Same failure modes as [`Self::extract_file_with_mime`].
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.extract_file_with_mime(path, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_kinds() {
        let kinds = TextConverter::supported_kinds();
        assert_eq!(kinds.len(), 3);
        assert!(kinds.contains(&DocumentKind::Pdf));
        assert!(kinds.contains(&DocumentKind::Docx));
        assert!(kinds.contains(&DocumentKind::Xlsx));
    }

    #[test]
    fn test_unknown_extension_is_format_error() {
        let converter = TextConverter::new();
        match converter.extract_file("notes.txt") {
            Err(DeskError::FormatError(msg)) => assert!(msg.contains("notes.txt")),
            other => panic!("expected FormatError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let converter = TextConverter::new();
        match converter.extract_file("/nonexistent/report.pdf") {
            Err(DeskError::IoError(_)) => {}
            other => panic!("expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn test_mime_overrides_extension() {
        // Declared type wins: a .bin file declared as PDF is routed to the
        // PDF backend (and fails there with the PDF error, proving routing).
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.bin");
        std::fs::write(&path, b"junk").unwrap();

        let converter = TextConverter::new();
        let err = converter
            .extract_file_with_mime(&path, Some("application/pdf"))
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot read PDF content");
    }

    #[test]
    fn test_routing_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let converter = TextConverter::new();

        for (name, expected) in [
            ("a.pdf", "cannot read PDF content"),
            ("a.docx", "cannot read Word content"),
            ("a.xls", "cannot read Excel content"),
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"junk").unwrap();
            let err = converter.extract_file(&path).unwrap_err();
            assert_eq!(err.to_string(), expected, "routing for {name}");
        }
    }
}
