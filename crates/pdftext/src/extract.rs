//! Page-range text extraction.
//!
//! [`extract_range`] walks a validated [`PageRange`] over any [`PageText`]
//! source, skipping pages without text and optionally prefixing each page
//! with a separator block. The [`Extraction`] result owns the concatenated
//! text and exposes the preview and download views of it.

use crate::document::PageText;
use crate::error::Error;
use crate::range::PageRange;

/// Maximum number of characters shown in a preview.
pub const PREVIEW_LIMIT: usize = 5000;

/// Suffix appended to a preview when the full text was longer than
/// [`PREVIEW_LIMIT`].
pub const TRUNCATION_NOTICE: &str = "\n\n... (text truncated for preview)";

/// File name of the download payload.
pub const DOWNLOAD_FILE_NAME: &str = "extracted_text.txt";

/// MIME type of the download payload.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// Width of the `=` rule lines in a separator block.
const RULE_WIDTH: usize = 60;

/// The separator block for one page: a rule line, a 1-based `Page N` label,
/// a second rule line, a blank line, then the page's raw text.
fn separator_block(page: u32, text: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\nPage {page}\n{rule}\n\n{text}")
}

/// Result of one extraction run.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Concatenated text of the non-empty pages, in page order.
    pub text: String,
    /// 1-based numbers of pages that yielded no text, ascending.
    pub empty_pages: Vec<u32>,
}

impl Extraction {
    /// Whether the run produced any usable text.
    ///
    /// `false` is the no-extractable-text condition: a warning for the
    /// caller, not an error. Typical for scanned documents with no digital
    /// text layer.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// At most the first [`PREVIEW_LIMIT`] characters of the text, suffixed
    /// with [`TRUNCATION_NOTICE`] when the full text is longer.
    pub fn preview(&self) -> String {
        match self.text.char_indices().nth(PREVIEW_LIMIT) {
            Some((byte_idx, _)) => {
                let mut preview = self.text[..byte_idx].to_string();
                preview.push_str(TRUNCATION_NOTICE);
                preview
            }
            None => self.text.clone(),
        }
    }

    /// The download payload: the full text as UTF-8 bytes, unchanged.
    pub fn download(&self) -> Download {
        Download {
            file_name: DOWNLOAD_FILE_NAME,
            mime_type: DOWNLOAD_MIME_TYPE,
            bytes: self.text.as_bytes().to_vec(),
        }
    }
}

/// An in-memory file payload offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub file_name: &'static str,
    /// MIME type of the payload.
    pub mime_type: &'static str,
    /// UTF-8 encoded file contents.
    pub bytes: Vec<u8>,
}

/// Extract the text of every page in `range` from `source`.
///
/// Pages whose text is empty after trimming are skipped and recorded in
/// [`Extraction::empty_pages`]. With `add_separator`, each kept page is
/// prefixed with its separator block; blocks are joined with a single
/// newline.
///
/// # Errors
///
/// Returns the source's error on the first failing page; partial output
/// gathered before the failure is discarded.
pub fn extract_range(
    source: &impl PageText,
    range: PageRange,
    add_separator: bool,
) -> Result<Extraction, Error> {
    let mut blocks: Vec<String> = Vec::new();
    let mut empty_pages: Vec<u32> = Vec::new();

    for page in range.pages() {
        let text = source.page_text(page)?;

        if text.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(page, "page has no extractable text");
            empty_pages.push(page);
            continue;
        }

        if add_separator {
            blocks.push(separator_block(page, &text));
        } else {
            blocks.push(text);
        }
    }

    Ok(Extraction {
        text: blocks.join("\n"),
        empty_pages,
    })
}
