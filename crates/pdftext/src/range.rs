//! Inclusive 1-based page ranges with up-front validation.

use crate::error::Error;

/// A validated inclusive range of 1-based page numbers.
///
/// Construction enforces `1 <= start <= end <= total_pages`, so extraction
/// never has to bounds-check individual pages.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Validate and build a range.
    ///
    /// The inverted-range check runs first, so `start > end` is always
    /// reported as [`Error::InvalidRange`] before any bounds check and
    /// before any page is read.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] when `start > end`, [`Error::PageOutOfBounds`]
    /// when `start` is zero or `end` exceeds `total_pages`.
    pub fn new(start: u32, end: u32, total_pages: u32) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        if start == 0 {
            return Err(Error::PageOutOfBounds {
                page: 0,
                total_pages,
            });
        }
        if end > total_pages {
            return Err(Error::PageOutOfBounds {
                page: end,
                total_pages,
            });
        }
        Ok(PageRange { start, end })
    }

    /// The full range of a document with `total_pages` pages.
    ///
    /// # Errors
    ///
    /// Fails for a zero-page document.
    pub fn full(total_pages: u32) -> Result<Self, Error> {
        Self::new(1, total_pages, total_pages)
    }

    /// 1-based start page.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// 1-based end page (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Iterate the 1-based page numbers in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        let range = PageRange::new(2, 5, 10).unwrap();
        assert_eq!(range.start(), 2);
        assert_eq!(range.end(), 5);
    }

    #[test]
    fn accepts_single_page_range() {
        let range = PageRange::new(3, 3, 3).unwrap();
        assert_eq!(range.pages().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn accepts_range_ending_at_last_page() {
        assert!(PageRange::new(1, 10, 10).is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let err = PageRange::new(5, 2, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { start: 5, end: 2 }));
    }

    #[test]
    fn inverted_check_runs_before_bounds_check() {
        // Both violations present: the inverted range must win.
        let err = PageRange::new(9, 7, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { start: 9, end: 7 }));
    }

    #[test]
    fn rejects_page_zero() {
        let err = PageRange::new(0, 4, 10).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfBounds {
                page: 0,
                total_pages: 10
            }
        ));
    }

    #[test]
    fn rejects_end_beyond_page_count() {
        let err = PageRange::new(1, 11, 10).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfBounds {
                page: 11,
                total_pages: 10
            }
        ));
    }

    #[test]
    fn full_covers_whole_document() {
        let range = PageRange::full(4).unwrap();
        assert_eq!(range.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn full_fails_for_empty_document() {
        assert!(PageRange::full(0).is_err());
    }

    #[test]
    fn pages_iterates_in_ascending_order() {
        let range = PageRange::new(3, 6, 10).unwrap();
        assert_eq!(range.pages().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn display_formats_as_dash_pair() {
        let range = PageRange::new(2, 7, 10).unwrap();
        assert_eq!(range.to_string(), "2-7");
    }
}
