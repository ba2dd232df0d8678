//! Session state and the action/render cycle.
//!
//! One [`Session`] models one user interaction sequence: upload a document,
//! pick a page range, extract, toggle options. Each [`Action`] runs to
//! completion through [`Session::apply`], which mutates the session and
//! returns a [`Render`] instruction for the front end. Failures never
//! propagate: every error is recovered into [`Render::Failed`] and the
//! session stays ready for the next action.

use crate::document::{Document, PageText};
use crate::error::Error;
use crate::extract::{Extraction, extract_range};
use crate::range::PageRange;
use crate::stats::{TextStats, compute_stats};

/// User-toggled options. Not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Insert a separator block before each page's text.
    pub page_separators: bool,
    /// Show the statistics panel.
    pub show_statistics: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            page_separators: true,
            show_statistics: false,
        }
    }
}

/// One user-triggered state transition.
#[derive(Debug)]
pub enum Action {
    /// A new PDF file was chosen.
    Upload(Vec<u8>),
    /// A page range was selected (1-based, inclusive).
    SelectRange {
        /// First page of the selection.
        start: u32,
        /// Last page of the selection.
        end: u32,
    },
    /// Run extraction over the current selection.
    Extract,
    /// Flip the page-separator option.
    ToggleSeparators,
    /// Flip the statistics option.
    ToggleStats,
}

/// What the front end should show after an action.
#[derive(Debug)]
pub enum Render {
    /// A document was uploaded; show its page count.
    PageCount(u32),
    /// A range was selected; confirm it.
    Range {
        /// First page of the selection.
        start: u32,
        /// Last page of the selection.
        end: u32,
    },
    /// Extraction succeeded. `empty_pages` lists pages that yielded no
    /// text; they are informational, not errors.
    Extracted {
        /// First extracted page.
        start: u32,
        /// Last extracted page.
        end: u32,
        /// Pages in the range that yielded no text, ascending.
        empty_pages: Vec<u32>,
    },
    /// Extraction ran but the whole range yielded no usable text. A
    /// warning, not an error; typical for scanned documents.
    NoExtractableText,
    /// Show the statistics panel.
    Stats(TextStats),
    /// Nothing new to show.
    Nothing,
    /// The action failed; show the error.
    Failed(Error),
}

/// In-memory state of one interaction sequence.
///
/// The raw bytes of the last successful upload are kept so extraction can
/// re-parse them; document handles themselves are request-scoped and never
/// cached across actions.
#[derive(Debug, Default)]
pub struct Session {
    pdf: Option<Vec<u8>>,
    total_pages: u32,
    range: Option<PageRange>,
    options: SessionOptions,
    extraction: Option<Extraction>,
}

impl Session {
    /// A fresh session: no document, separators on, statistics off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page count of the current document, 0 when none is loaded.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The explicitly selected range, if any.
    pub fn range(&self) -> Option<PageRange> {
        self.range
    }

    /// Current option toggles.
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// The last successful extraction, if any.
    pub fn extraction(&self) -> Option<&Extraction> {
        self.extraction.as_ref()
    }

    /// Apply one action and return the rendering instruction.
    pub fn apply(&mut self, action: Action) -> Render {
        match action {
            Action::Upload(bytes) => self.upload(bytes),
            Action::SelectRange { start, end } => self.select_range(start, end),
            Action::Extract => self.extract(),
            Action::ToggleSeparators => {
                self.options.page_separators = !self.options.page_separators;
                Render::Nothing
            }
            Action::ToggleStats => self.toggle_stats(),
        }
    }

    fn upload(&mut self, bytes: Vec<u8>) -> Render {
        let doc = match Document::from_bytes(&bytes) {
            Ok(doc) => doc,
            Err(e) => {
                // The previous extraction stays visible; the document is gone.
                self.clear_document();
                return Render::Failed(e);
            }
        };

        let total_pages = doc.page_count();
        if total_pages == 0 {
            self.clear_document();
            return Render::Failed(Error::Parse(
                "could not determine page count".to_string(),
            ));
        }

        self.pdf = Some(bytes);
        self.total_pages = total_pages;
        // The range control resets to the whole document.
        self.range = None;
        Render::PageCount(total_pages)
    }

    fn clear_document(&mut self) {
        self.pdf = None;
        self.total_pages = 0;
        self.range = None;
    }

    fn select_range(&mut self, start: u32, end: u32) -> Render {
        if self.pdf.is_none() {
            return Render::Failed(Error::NoDocument);
        }
        match PageRange::new(start, end, self.total_pages) {
            Ok(range) => {
                self.range = Some(range);
                Render::Range {
                    start: range.start(),
                    end: range.end(),
                }
            }
            // A rejected selection leaves the previous one in place.
            Err(e) => Render::Failed(e),
        }
    }

    fn extract(&mut self) -> Render {
        let Some(bytes) = self.pdf.as_deref() else {
            return Render::Failed(Error::NoDocument);
        };

        // Parse again from the stored bytes; the upload-time handle was
        // dropped after the page-count query.
        let doc = match Document::from_bytes(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                self.extraction = None;
                return Render::Failed(e);
            }
        };

        let range = match self.range {
            Some(range) => range,
            None => match PageRange::full(self.total_pages) {
                Ok(range) => range,
                Err(e) => return Render::Failed(e),
            },
        };

        match extract_range(&doc, range, self.options.page_separators) {
            Ok(extraction) if !extraction.has_text() => {
                self.extraction = None;
                Render::NoExtractableText
            }
            Ok(extraction) => {
                let empty_pages = extraction.empty_pages.clone();
                self.extraction = Some(extraction);
                Render::Extracted {
                    start: range.start(),
                    end: range.end(),
                    empty_pages,
                }
            }
            Err(e) => {
                self.extraction = None;
                Render::Failed(e)
            }
        }
    }

    fn toggle_stats(&mut self) -> Render {
        self.options.show_statistics = !self.options.show_statistics;
        if !self.options.show_statistics {
            return Render::Nothing;
        }
        match &self.extraction {
            // Statistics always reflect the live separator toggle, not the
            // one in effect when the text was extracted.
            Some(extraction) => Render::Stats(compute_stats(
                &extraction.text,
                self.options.page_separators,
            )),
            None => Render::Nothing,
        }
    }
}
