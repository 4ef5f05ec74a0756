//! Fragment element
//!
//!     A fragment is one classified span of a sub-item or bug line. Its `raw` text is the
//!     literal substring from the source, including the `#` or `@` prefix for tags.

use serde::Serialize;
use std::fmt;

/// The kind of a fragment. Exactly one applies to every fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Hashtag,
    Mention,
    Text,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentKind::Hashtag => write!(f, "hashtag"),
            FragmentKind::Mention => write!(f, "mention"),
            FragmentKind::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub raw: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn hashtag(raw: impl Into<String>) -> Self {
        Self::new(FragmentKind::Hashtag, raw)
    }

    pub fn mention(raw: impl Into<String>) -> Self {
        Self::new(FragmentKind::Mention, raw)
    }

    pub fn text(raw: impl Into<String>) -> Self {
        Self::new(FragmentKind::Text, raw)
    }

    pub fn is_hashtag(&self) -> bool {
        self.kind == FragmentKind::Hashtag
    }

    pub fn is_mention(&self) -> bool {
        self.kind == FragmentKind::Mention
    }

    pub fn is_text(&self) -> bool {
        self.kind == FragmentKind::Text
    }

    /// The tag or mention name without its prefix; text fragments return their raw text
    pub fn name(&self) -> &str {
        match self.kind {
            FragmentKind::Hashtag | FragmentKind::Mention => &self.raw[1..],
            FragmentKind::Text => &self.raw,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.kind, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_kind_flag() {
        for fragment in [
            Fragment::hashtag("#security"),
            Fragment::mention("@alice"),
            Fragment::text("Remember session "),
        ] {
            let flags = [
                fragment.is_hashtag(),
                fragment.is_mention(),
                fragment.is_text(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{}", fragment);
        }
    }

    #[test]
    fn test_name_strips_prefix() {
        assert_eq!(Fragment::hashtag("#security").name(), "security");
        assert_eq!(Fragment::mention("@alice").name(), "alice");
        assert_eq!(Fragment::text(" plain ").name(), " plain ");
    }
}
