//! lopdf-backed document handle.
//!
//! [`Document`] wraps [`lopdf::Document`] and exposes the two operations the
//! extraction flow needs: total page count and per-page text retrieval. The
//! [`PageText`] trait keeps extraction logic independent of the backend so
//! it can be exercised against synthetic sources in tests.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Error;

/// Per-page text source.
///
/// Pages are addressed by 1-based number throughout.
pub trait PageText {
    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Text of the given page. Absent text is reported as an empty string,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Extraction`] when the parser fails on the page and
    /// [`Error::PageOutOfBounds`] when the page number is not in the
    /// document.
    fn page_text(&self, page: u32) -> Result<String, Error>;
}

/// A parsed PDF document backed by lopdf.
///
/// The handle is request-scoped: callers open it, query it, and drop it.
/// Nothing is cached across requests.
pub struct Document {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Page number to object id, as reported by lopdf (1-based keys).
    pages: BTreeMap<u32, lopdf::ObjectId>,
}

impl Document {
    /// Parse a PDF from an in-memory byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the bytes do not form a parseable PDF
    /// or the document is encrypted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| Error::Parse(format!("failed to parse PDF: {e}")))?;

        // Reject encrypted PDFs; there is no password surface in this flow
        if inner.is_encrypted() {
            return Err(Error::Parse(
                "document is encrypted (password-protected PDFs are not supported)".to_string(),
            ));
        }

        let pages = inner.get_pages();

        #[cfg(feature = "tracing")]
        tracing::debug!(pages = pages.len(), "parsed PDF document");

        Ok(Document { inner, pages })
    }

    /// Read and parse a PDF file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read, otherwise as
    /// [`Document::from_bytes`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl PageText for Document {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String, Error> {
        if !self.pages.contains_key(&page) {
            return Err(Error::PageOutOfBounds {
                page,
                total_pages: self.pages.len() as u32,
            });
        }
        self.inner.extract_text(&[page]).map_err(|e| Error::Extraction {
            page,
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("page_count", &self.pages.len())
            .finish_non_exhaustive()
    }
}
