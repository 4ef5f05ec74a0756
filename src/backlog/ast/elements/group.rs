//! Group element
//!
//!     A group is the bucket a heading opens. Its `name` is the normalized lookup key
//!     (trimmed, lower-cased heading text) and `key` the display form produced by title
//!     casing that name. Two headings with the same normalized name share one group.

use super::super::range::Range;
use super::entry::Entry;
use super::story::Story;
use super::subitem::Subitem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: String,
    pub name: String,
    pub entries: Vec<Entry>,
    /// The line whose processing materialized the group
    pub location: Range,
}

impl Group {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            entries: Vec::new(),
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stories(&self) -> impl Iterator<Item = &Story> {
        self.entries.iter().filter_map(Entry::as_story)
    }

    pub fn bugs(&self) -> impl Iterator<Item = &Subitem> {
        self.entries.iter().filter_map(Entry::as_bug)
    }
}
