//! DOCX (Microsoft Word) text extraction backend
//!
//! DOCX files are ZIP archives; the whole document body lives in
//! `word/document.xml`. Text runs are `w:t` elements, grouped into `w:p`
//! paragraphs. This backend streams that one XML part with quick-xml and
//! collects the runs, one line per paragraph. Styles, tables, images,
//! headers and footers are ignored: the caller only wants raw text.

use crate::traits::TextExtractor;
use log::warn;
use projdesk_core::{DeskError, DocumentKind, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{BufReader, Cursor, Read};
use zip::ZipArchive;

/// Backend for extracting text from Word documents (.docx)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extraction backend
    #[inline]
    #[must_use = "creates a backend instance that should be used for extraction"]
    pub const fn new() -> Self {
        Self
    }

    /// Walk `word/document.xml` and collect `w:t` runs into plain text.
    fn collect_text(document_xml: &[u8]) -> std::result::Result<String, quick_xml::Error> {
        let mut reader = Reader::from_reader(BufReader::new(Cursor::new(document_xml)));
        let mut buf = Vec::new();
        let mut out = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
                Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:br" => out.push('\n'),
                    b"w:tab" => out.push(' '),
                    _ => {}
                },
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => out.push('\n'),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(out)
    }
}

impl TextExtractor for DocxExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Docx
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            warn!("DOCX container open failed: {e}");
            DeskError::ExtractionError(DocumentKind::Docx)
        })?;

        let mut document_xml = Vec::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                warn!("DOCX is missing word/document.xml: {e}");
                DeskError::ExtractionError(DocumentKind::Docx)
            })?
            .read_to_end(&mut document_xml)
            .map_err(|e| {
                warn!("DOCX body read failed: {e}");
                DeskError::ExtractionError(DocumentKind::Docx)
            })?;

        let text = Self::collect_text(&document_xml).map_err(|e| {
            warn!("DOCX body parse failed: {e}");
            DeskError::ExtractionError(DocumentKind::Docx)
        })?;

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(DocxExtractor::new().kind(), DocumentKind::Docx);
    }

    #[test]
    fn test_garbage_bytes_yield_generic_error() {
        let backend = DocxExtractor::new();
        match backend.extract_bytes(b"definitely not a zip archive") {
            Err(DeskError::ExtractionError(DocumentKind::Docx)) => {}
            other => panic!("expected generic Word error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_generic_error() {
        let err = DocxExtractor::new().extract_bytes(b"").unwrap_err();
        assert_eq!(err.to_string(), "cannot read Word content");
    }

    #[test]
    fn test_collect_text_paragraphs() {
        let xml = br#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>
                <w:p><w:r><w:t>Second</w:t></w:r><w:r><w:t> half</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;
        let text = DocxExtractor::collect_text(xml).unwrap();
        assert_eq!(text.trim(), "First paragraph\nSecond half");
    }

    #[test]
    fn test_collect_text_escapes_and_breaks() {
        let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:body>
              <w:p><w:r><w:t>a &amp; b</w:t><w:br/><w:t>c</w:t></w:r></w:p>
            </w:body>
          </w:document>"#;
        let text = DocxExtractor::collect_text(xml).unwrap();
        assert_eq!(text.trim(), "a & b\nc");
    }

    #[test]
    fn test_collect_text_ignores_non_run_text() {
        // Text outside w:t (e.g. whitespace between elements) is dropped.
        let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:body>  stray  <w:p><w:r><w:t>kept</w:t></w:r></w:p></w:body>
          </w:document>"#;
        let text = DocxExtractor::collect_text(xml).unwrap();
        assert_eq!(text.trim(), "kept");
    }
}
