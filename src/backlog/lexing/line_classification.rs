//! Line Classification
//!
//! Determines the category of one raw source line. Precedence, highest first:
//!
//! 1. Heading underline: the line is three or more `-` and nothing else. The heading text
//!    is the *previous* line.
//! 2. Heading marker: one or more `#` followed by whitespace, Markdown style.
//! 3. Blank: empty or whitespace only.
//! 4. Sub-item: starts with whitespace.
//! 5. Bug: after trimming and removing one leading `-`, starts with the `#bug` token.
//! 6. Story candidate: anything else.
//!
//! Heading text is cleaned (trimmed, lower-cased) here; title casing for display happens
//! when the group is materialized.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s+(.*)$").unwrap());
static BUG_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#bug\b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    /// `---` under a heading line; carries the cleaned text of the previous line
    HeadingUnderline(String),
    /// `# Heading`; carries the cleaned remainder
    HeadingMarker(String),
    Blank,
    Subitem,
    /// Carries the trimmed, bullet-stripped line
    Bug(String),
    /// Carries the trimmed, bullet-stripped line
    StoryCandidate(String),
}

impl LineType {
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            LineType::HeadingUnderline(_) | LineType::HeadingMarker(_)
        )
    }

    /// Heading text for heading lines, `None` otherwise
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            LineType::HeadingUnderline(text) | LineType::HeadingMarker(text) => Some(text),
            _ => None,
        }
    }
}

/// Classify `line`; `previous` is the line before it, if any.
pub fn classify_line(line: &str, previous: Option<&str>) -> LineType {
    if is_heading_underline(line) {
        return LineType::HeadingUnderline(clean(previous.unwrap_or("")));
    }
    if let Some(captures) = HEADING_MARKER.captures(line) {
        return LineType::HeadingMarker(clean(&captures[1]));
    }
    if line.trim().is_empty() {
        return LineType::Blank;
    }
    if starts_indented(line) {
        return LineType::Subitem;
    }
    let text = strip_bullet(line);
    if BUG_MARKER.is_match(text) {
        return LineType::Bug(text.to_string());
    }
    LineType::StoryCandidate(text.to_string())
}

/// Trim and lower-case
pub fn clean(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Trim, drop one leading `-`, trim again
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_prefix('-').unwrap_or(trimmed).trim()
}

fn is_heading_underline(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

fn starts_indented(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_whitespace)
}
