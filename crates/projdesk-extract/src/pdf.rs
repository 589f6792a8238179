//! PDF text extraction backend using lopdf
//!
//! Walks pages in document order, extracts each page's recognized text runs,
//! and joins pages with one blank line. There is no partial-page recovery: a
//! corrupt stream, password protection or decode error fails the whole
//! extraction with the generic "cannot read PDF content" error.

use crate::traits::TextExtractor;
use log::warn;
use lopdf::Document;
use projdesk_core::{DeskError, DocumentKind, Result};

/// Backend for extracting text from PDF documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extraction backend
    #[inline]
    #[must_use = "creates a backend instance that should be used for extraction"]
    pub const fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        let doc = Document::load_mem(data).map_err(|e| {
            warn!("PDF decode failed: {e}");
            DeskError::ExtractionError(DocumentKind::Pdf)
        })?;

        if doc.is_encrypted() {
            warn!("PDF is encrypted, refusing to extract");
            return Err(DeskError::ExtractionError(DocumentKind::Pdf));
        }

        // get_pages returns a BTreeMap keyed by 1-based page number, so
        // iteration follows document order.
        let mut pages = Vec::new();
        for page_number in doc.get_pages().keys() {
            let text = doc.extract_text(&[*page_number]).map_err(|e| {
                warn!("PDF text extraction failed on page {page_number}: {e}");
                DeskError::ExtractionError(DocumentKind::Pdf)
            })?;
            let text = text.trim();
            if !text.is_empty() {
                pages.push(text.to_string());
            }
        }

        Ok(pages.join("\n\n"))
    }
}
