//! pdftext: Extract text from PDF documents, page by page.
//!
//! This crate parses a PDF held in memory, extracts plain text from a
//! selected page range, and computes summary statistics over the result.
//! [`Session`] models a whole interaction sequence (upload, select range,
//! extract, toggle options) as explicit actions with explicit render
//! outcomes; the lower-level pieces ([`Document`], [`PageRange`],
//! [`extract_range`], [`compute_stats`]) are usable on their own.

pub mod document;
pub mod error;
pub mod extract;
pub mod range;
pub mod session;
pub mod stats;

pub use document::{Document, PageText};
pub use error::Error;
pub use extract::{
    DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, Download, Extraction, PREVIEW_LIMIT,
    TRUNCATION_NOTICE, extract_range,
};
pub use range::PageRange;
pub use session::{Action, Render, Session, SessionOptions};
pub use stats::{TextStats, compute_stats};
