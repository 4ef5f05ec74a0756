//! Entry element
//!
//!     The things a group holds. Stories come from triplet-shaped lines, bugs from lines
//!     starting with `#bug`. A bug is never nested under a story.

use super::super::range::Range;
use super::story::Story;
use super::subitem::Subitem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Story(Story),
    Bug(Subitem),
}

impl Entry {
    pub fn is_bug(&self) -> bool {
        matches!(self, Entry::Bug(_))
    }

    pub fn is_story(&self) -> bool {
        matches!(self, Entry::Story(_))
    }

    pub fn as_story(&self) -> Option<&Story> {
        match self {
            Entry::Story(story) => Some(story),
            Entry::Bug(_) => None,
        }
    }

    pub fn as_bug(&self) -> Option<&Subitem> {
        match self {
            Entry::Bug(bug) => Some(bug),
            Entry::Story(_) => None,
        }
    }

    pub fn sizes(&self) -> &[String] {
        match self {
            Entry::Story(story) => &story.sizes,
            Entry::Bug(bug) => &bug.sizes,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Entry::Story(story) => &story.raw,
            Entry::Bug(bug) => &bug.raw,
        }
    }

    pub fn location(&self) -> &Range {
        match self {
            Entry::Story(story) => &story.location,
            Entry::Bug(bug) => &bug.location,
        }
    }
}

impl From<Story> for Entry {
    fn from(story: Story) -> Self {
        Entry::Story(story)
    }
}
