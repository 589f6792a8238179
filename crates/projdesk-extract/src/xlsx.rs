//! Excel (.xlsx, .xls) text extraction backend using calamine
//!
//! Serializes every sheet in file order: a header line naming the sheet,
//! then one line per row with cell values joined by single spaces, with a
//! blank line between sheets. Legacy .xls workbooks go through the same
//! path; calamine sniffs the container format from the bytes.

use crate::traits::TextExtractor;
use calamine::{open_workbook_auto_from_rs, Reader};
use log::warn;
use projdesk_core::{DeskError, DocumentKind, Result};
use std::fmt::Write as FmtWrite;
use std::io::Cursor;

/// Backend for extracting text from Excel workbooks (.xlsx, .xls)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct XlsxExtractor;

impl XlsxExtractor {
    /// Create a new Excel extraction backend
    #[inline]
    #[must_use = "creates a backend instance that should be used for extraction"]
    pub const fn new() -> Self {
        Self
    }
}

impl TextExtractor for XlsxExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Xlsx
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data)).map_err(|e| {
            warn!("Excel workbook open failed: {e}");
            DeskError::ExtractionError(DocumentKind::Xlsx)
        })?;

        let sheet_names = workbook.sheet_names().to_owned();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                warn!("Excel sheet '{name}' read failed: {e}");
                DeskError::ExtractionError(DocumentKind::Xlsx)
            })?;

            let mut out = String::new();
            let _ = writeln!(out, "--- Sheet: {name} ---");
            for row in range.rows() {
                let line = row
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push_str(&line);
                out.push('\n');
            }
            sheets.push(out.trim_end().to_string());
        }

        Ok(sheets.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(XlsxExtractor::new().kind(), DocumentKind::Xlsx);
        assert!(XlsxExtractor::new().can_handle(DocumentKind::Xlsx));
    }

    #[test]
    fn test_garbage_bytes_yield_generic_error() {
        let backend = XlsxExtractor::new();
        match backend.extract_bytes(b"not a workbook at all") {
            Err(DeskError::ExtractionError(DocumentKind::Xlsx)) => {}
            other => panic!("expected generic Excel error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_generic_error() {
        let err = XlsxExtractor::new().extract_bytes(b"").unwrap_err();
        assert_eq!(err.to_string(), "cannot read Excel content");
    }

    #[test]
    fn test_zip_that_is_not_a_workbook_yields_generic_error() {
        // A valid ZIP container without workbook parts must fail the same
        // way as random bytes.
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("readme.txt", options).unwrap();
            std::io::Write::write_all(&mut writer, b"hello").unwrap();
            writer.finish().unwrap();
        }
        let err = XlsxExtractor::new().extract_bytes(&buf).unwrap_err();
        assert_eq!(err.to_string(), "cannot read Excel content");
    }
}
