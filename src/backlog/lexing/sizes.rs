//! Size markers
//!
//! A size marker is a non-empty bracket group such as `[3]` or `[XL]`. Markers are
//! matched lazily (`[a] [b]` is two markers), surfaced without their brackets in
//! left-to-right order, and removed from the text handed to later passes.

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SizeMarkers {
    pub labels: Vec<String>,
    /// The input with every marker removed
    pub remainder: String,
}

pub fn extract_sizes(text: &str) -> SizeMarkers {
    let labels = SIZE_MARKER
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect();
    let remainder = SIZE_MARKER.replace_all(text, "").into_owned();
    SizeMarkers { labels, remainder }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marker() {
        let sizes = extract_sizes("TO LOGIN [3] SO THAT");
        assert_eq!(sizes.labels, vec!["3"]);
        assert_eq!(sizes.remainder, "TO LOGIN  SO THAT");
    }

    #[test]
    fn test_markers_keep_order() {
        let sizes = extract_sizes("[XL] middle [2]");
        assert_eq!(sizes.labels, vec!["XL", "2"]);
        assert_eq!(sizes.remainder, " middle ");
    }

    #[test]
    fn test_empty_brackets_are_not_markers() {
        let sizes = extract_sizes("nothing [] here");
        assert!(sizes.labels.is_empty());
        assert_eq!(sizes.remainder, "nothing [] here");
    }

    #[test]
    fn test_unclosed_bracket_is_text() {
        let sizes = extract_sizes("open [ended");
        assert!(sizes.labels.is_empty());
        assert_eq!(sizes.remainder, "open [ended");
    }
}
