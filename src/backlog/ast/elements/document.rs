//! Document element
//!
//!     The parse result: groups in the order they were first materialized. A document is
//!     a snapshot; nothing mutates it after [parse](crate::backlog::parsing::parse)
//!     returns.

use super::entry::Entry;
use super::group::Group;
use super::story::Story;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub groups: Vec<Group>,
}

impl Document {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look a group up by heading text; the lookup normalizes like the parser does
    pub fn group(&self, heading: &str) -> Option<&Group> {
        let name = heading.trim().to_lowercase();
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }

    pub fn stories(&self) -> impl Iterator<Item = &Story> {
        self.entries().filter_map(Entry::as_story)
    }

    pub fn story_count(&self) -> usize {
        self.stories().count()
    }

    pub fn bug_count(&self) -> usize {
        self.entries().filter(|entry| entry.is_bug()).count()
    }
}
