//! Input document formats for text extraction
//!
//! This module defines the `DocumentKind` enum covering the document types
//! users upload for text extraction (PDF, Word, Excel).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported input document format
///
/// The format is a tagged union over the three upload types. Each variant has
/// a dedicated extraction backend in `projdesk-extract`; adding a format means
/// adding a variant here and a backend there, callers stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// PDF document
    #[serde(rename = "PDF")]
    Pdf,
    /// Microsoft Word document (.docx, .doc)
    #[serde(rename = "DOCX")]
    Docx,
    /// Microsoft Excel workbook (.xlsx, .xls)
    #[serde(rename = "XLSX")]
    Xlsx,
}

impl DocumentKind {
    /// Resolve a format from a declared MIME type
    ///
    /// Returns `None` for MIME types outside the supported set.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/msword" => Some(Self::Docx),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "application/vnd.ms-excel" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// Resolve a format from a file extension (case-insensitive, no dot)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" | "doc" => Some(Self::Docx),
            "xlsx" | "xls" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// Resolve a format from a declared MIME type, falling back to the
    /// path's extension
    ///
    /// This mirrors how the upload flow works: the browser-declared content
    /// type wins when it is recognized, otherwise the file name decides.
    #[must_use]
    pub fn detect<P: AsRef<Path>>(mime: Option<&str>, path: P) -> Option<Self> {
        if let Some(kind) = mime.and_then(Self::from_mime) {
            return Some(kind);
        }
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// File extensions associated with this format
    #[must_use]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Docx => &["docx", "doc"],
            Self::Xlsx => &["xlsx", "xls"],
        }
    }

    /// Generic user-facing message for an unreadable document of this format
    ///
    /// Parse failures are never surfaced with the underlying library
    /// diagnostic; callers log the diagnostic and show this instead.
    #[must_use]
    pub const fn unreadable_message(&self) -> &'static str {
        match self {
            Self::Pdf => "cannot read PDF content",
            Self::Docx => "cannot read Word content",
            Self::Xlsx => "cannot read Excel content",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Docx => write!(f, "DOCX"),
            Self::Xlsx => write!(f, "XLSX"),
        }
    }
}
