//! Document text extraction backends for projdesk
//!
//! This crate turns the document formats users upload (PDF, Word, Excel)
//! into plain UTF-8 text for storage as project artifacts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     TextConverter                       │
//! │   (detects the format, dispatches to the backend)       │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                   TextExtractor trait                   │
//! │   fn extract_bytes(&self, data: &[u8]) -> Result<String>│
//! └─────────────────────────────────────────────────────────┘
//!              │                │                 │
//!              ▼                ▼                 ▼
//!      ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//!      │ PdfExtractor │ │ DocxExtractor│ │ XlsxExtractor│
//!      │   (lopdf)    │ │ (zip + xml)  │ │  (calamine)  │
//!      └──────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! # Output conventions
//!
//! - PDF: pages in document order, trimmed, separated by one blank line.
//! - DOCX: one line per paragraph, trimmed.
//! - XLSX/XLS: per sheet a `--- Sheet: <name> ---` header, then one line
//!   per row with cell values joined by spaces; blank line between sheets.
//!
//! # Failure model
//!
//! Every parse failure is recovered at this boundary: the library
//! diagnostic is logged at `warn` and replaced with a generic per-format
//! error, so callers can show a stable message and never see a raw parser
//! exception. There are no retries and no partial results.
//!
//! # Example
//!
//! ```rust,no_run
//! use projdesk_extract::TextConverter;
//!
//! fn main() -> projdesk_core::Result<()> {
//!     let converter = TextConverter::new();
//!     let text = converter.extract_file("minutes.docx")?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod converter;
pub mod docx;
pub mod pdf;
pub mod traits;
pub mod xlsx;

pub use converter::TextConverter;
pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use traits::TextExtractor;
pub use xlsx::XlsxExtractor;

// Re-export the shared types callers need alongside the extractors.
pub use projdesk_core::{DeskError, DocumentKind, Result};
