//! Sub-item element
//!
//!     A sub-item is an indented detail line attached to the story above it. The same shape
//!     is used for bugs, which are filed directly in a group (see [Entry](super::Entry)).
//!
//!     `sizes` is empty when the line carried no bracket markers; serialized output omits
//!     the field in that case.

use super::super::range::Range;
use super::fragment::{Fragment, FragmentKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subitem {
    /// The trimmed source line with one leading `-` removed
    pub raw: String,
    pub fragments: Vec<Fragment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    pub location: Range,
}

impl Subitem {
    pub fn new(raw: String, fragments: Vec<Fragment>, sizes: Vec<String>) -> Self {
        Self {
            raw,
            fragments,
            sizes,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn hashtags(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments_of(FragmentKind::Hashtag)
    }

    pub fn mentions(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments_of(FragmentKind::Mention)
    }

    fn fragments_of(&self, kind: FragmentKind) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(move |f| f.kind == kind)
    }

    /// The concatenated text fragments, tags and mentions left out
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| f.is_text())
            .map(|f| f.raw.as_str())
            .collect()
    }

    pub fn is_sized(&self) -> bool {
        !self.sizes.is_empty()
    }
}
