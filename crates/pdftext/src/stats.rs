//! Text statistics over an extraction result.
//!
//! Counts characters, word tokens, and an estimated page count, and ranks
//! the most frequent words after stopword filtering. Statistics are a
//! derived, read-only view; they are recomputed on demand and never stored.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Word tokens: maximal runs of word characters (letters, digits,
/// underscore).
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Frequency-analysis tokens: three or more consecutive ASCII letters.
/// Numbers and shorter tokens are excluded from the ranking.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());

/// Common English function words excluded from the frequency ranking.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "this",
        "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which",
        "who", "when", "where", "why", "how", "all", "each", "every", "both", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
        "too", "very", "just", "now",
    ]
    .into_iter()
    .collect()
});

/// How many ranked words the frequency table keeps.
const TOP_WORDS: usize = 10;

/// Average lines per page assumed by the page-count heuristic when no
/// separator markers are present.
const LINES_PER_PAGE: usize = 50;

/// Basic statistics over one extracted text.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Total number of Unicode characters.
    pub char_count: usize,
    /// Number of word tokens.
    pub word_count: usize,
    /// Estimated page count. Exact only when page separators were inserted;
    /// otherwise a rough lines-per-page approximation.
    pub page_count_estimate: usize,
    /// The most frequent non-stopword words with their counts, descending.
    /// At most [`TOP_WORDS`] entries; ties keep first-encountered order.
    pub top_words: Vec<(String, usize)>,
}

/// Compute statistics for `text`.
///
/// `separators_enabled` selects the page-count strategy: counting the
/// literal `"Page "` labels the separator blocks insert, or estimating
/// `max(1, newlines / 50)` when no separators were used.
pub fn compute_stats(text: &str, separators_enabled: bool) -> TextStats {
    let char_count = text.chars().count();
    let word_count = WORD_RE.find_iter(text).count();

    let page_count_estimate = if separators_enabled {
        text.matches("Page ").count()
    } else {
        std::cmp::max(1, text.matches('\n').count() / LINES_PER_PAGE)
    };

    TextStats {
        char_count,
        word_count,
        page_count_estimate,
        top_words: top_words(text),
    }
}

/// Rank non-stopword tokens of `text` by frequency, descending, keeping
/// the first-encountered order between equal counts.
fn top_words(text: &str) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in TOKEN_RE.find_iter(&lowered) {
        let word = token.as_str();
        if STOPWORDS.contains(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| (word.to_string(), counts[word]))
        .collect();
    // Stable sort: equal counts stay in first-encountered order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_WORDS);
    ranked
}
