/// Parse a page range string like "2-5" (or a single page like "3") into a
/// 1-indexed inclusive (start, end) pair.
///
/// Page 0 is rejected here since no document has one; ordering and bounds
/// against the page count are validated by the session when the selection
/// is applied.
pub fn parse_page_range(input: &str) -> Result<(u32, u32), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty page range".to_string());
    }

    if let Some((start_str, end_str)) = input.split_once('-') {
        let start: u32 = start_str
            .trim()
            .parse()
            .map_err(|_| format!("invalid page number: '{start_str}'"))?;
        let end: u32 = end_str
            .trim()
            .parse()
            .map_err(|_| format!("invalid page number: '{end_str}'"))?;

        if start == 0 || end == 0 {
            return Err("page 0 is invalid (pages start at 1)".to_string());
        }

        Ok((start, end))
    } else {
        let page: u32 = input
            .parse()
            .map_err(|_| format!("invalid page number: '{input}'"))?;

        if page == 0 {
            return Err("page 0 is invalid (pages start at 1)".to_string());
        }

        Ok((page, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page() {
        assert_eq!(parse_page_range("1").unwrap(), (1, 1));
        assert_eq!(parse_page_range("3").unwrap(), (3, 3));
    }

    #[test]
    fn page_range() {
        assert_eq!(parse_page_range("2-4").unwrap(), (2, 4));
    }

    #[test]
    fn whitespace_tolerance() {
        assert_eq!(parse_page_range(" 1 - 5 ").unwrap(), (1, 5));
        assert_eq!(parse_page_range(" 2 ").unwrap(), (2, 2));
    }

    #[test]
    fn reversed_range_parses() {
        // Ordering is a semantic check, not a parse error.
        assert_eq!(parse_page_range("5-2").unwrap(), (5, 2));
    }

    #[test]
    fn page_zero_is_rejected() {
        let err = parse_page_range("0").unwrap_err();
        assert!(err.contains("invalid"));
    }

    #[test]
    fn page_zero_in_range_is_rejected() {
        let err = parse_page_range("0-2").unwrap_err();
        assert!(err.contains("pages start at 1"));
    }

    #[test]
    fn non_numeric_is_rejected() {
        let err = parse_page_range("abc").unwrap_err();
        assert!(err.contains("invalid page number"));
    }

    #[test]
    fn non_numeric_endpoint_is_rejected() {
        let err = parse_page_range("1-x").unwrap_err();
        assert!(err.contains("invalid page number"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_page_range("  ").unwrap_err();
        assert!(err.contains("empty"));
    }
}
