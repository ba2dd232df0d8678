//! Error types for document loading, range validation, and extraction.
//!
//! Uses [`thiserror`] for ergonomic error derivation. A single [`Error`]
//! enum covers the whole flow; every failure is recoverable and the caller
//! stays ready to accept a new file or a new range selection.

use thiserror::Error;

/// Error type for PDF text extraction operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte buffer is not a parseable PDF, or it is encrypted.
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Start page after end page. Raised before any page is read.
    #[error("invalid page range: start page {start} must be less than or equal to end page {end}")]
    InvalidRange {
        /// Requested 1-based start page.
        start: u32,
        /// Requested 1-based end page.
        end: u32,
    },

    /// Page number outside `1..=total_pages`.
    #[error("page {page} is out of bounds (valid pages are 1 to {total_pages})")]
    PageOutOfBounds {
        /// Offending 1-based page number.
        page: u32,
        /// Total pages in the document.
        total_pages: u32,
    },

    /// Unexpected parser failure while reading a page mid-extraction.
    /// Partial output gathered before the failure is discarded.
    #[error("extraction failed on page {page}: {reason}")]
    Extraction {
        /// 1-based page number that failed.
        page: u32,
        /// Parser-reported cause.
        reason: String,
    },

    /// Error reading PDF data from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session action that needs a document ran before a successful upload.
    #[error("no document loaded")]
    NoDocument,
}
