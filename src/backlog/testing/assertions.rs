//! Fluent assertion API for parsed backlogs

use crate::backlog::ast::{AstNode, Document, Entry, Fragment, Group, Story, Subitem};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_backlog(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of groups in the document
    pub fn group_count(self, expected: usize) -> Self {
        let actual = self.doc.groups.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} groups, found {} groups: [{}]",
            expected,
            actual,
            summarize_groups(&self.doc.groups)
        );
        self
    }

    /// Assert the group keys, in document order
    pub fn group_keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(actual, expected, "Group keys differ");
        self
    }

    /// Assert on a specific group by index
    pub fn group<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(GroupAssertion<'a>),
    {
        assert!(
            index < self.doc.groups.len(),
            "Group index {} out of bounds (document has {} groups)",
            index,
            self.doc.groups.len()
        );

        assertion(GroupAssertion {
            group: &self.doc.groups[index],
            context: format!("groups[{}]", index),
        });
        self
    }

    pub fn story_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.story_count(),
            expected,
            "Expected {} stories across all groups",
            expected
        );
        self
    }

    pub fn bug_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.bug_count(),
            expected,
            "Expected {} bugs across all groups",
            expected
        );
        self
    }
}

// ============================================================================
// Group Assertions
// ============================================================================

pub struct GroupAssertion<'a> {
    group: &'a Group,
    context: String,
}

impl<'a> GroupAssertion<'a> {
    pub fn key(self, expected: &str) -> Self {
        assert_eq!(
            self.group.key, expected,
            "{}: Expected key '{}', found '{}'",
            self.context, expected, self.group.key
        );
        self
    }

    pub fn entry_count(self, expected: usize) -> Self {
        let actual = self.group.entries.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} entries, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.group
                .entries
                .iter()
                .map(AstNode::display_label)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    /// Assert the group starts on the given (zero-based) line
    pub fn starts_at_line(self, expected: usize) -> Self {
        assert_eq!(
            self.group.location.start.line, expected,
            "{}: Expected group to start at line {}",
            self.context, expected
        );
        self
    }

    pub fn entry<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EntryAssertion<'a>),
    {
        assert!(
            index < self.group.entries.len(),
            "{}: Entry index {} out of bounds (group has {} entries)",
            self.context,
            index,
            self.group.entries.len()
        );

        assertion(EntryAssertion {
            entry: &self.group.entries[index],
            context: format!("{}.entries[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Entry Assertions
// ============================================================================

pub struct EntryAssertion<'a> {
    entry: &'a Entry,
    context: String,
}

impl<'a> EntryAssertion<'a> {
    /// Assert this entry is a Story and return story-specific assertions
    pub fn assert_story(self) -> StoryAssertion<'a> {
        match self.entry {
            Entry::Story(story) => StoryAssertion {
                story,
                context: self.context,
            },
            Entry::Bug(_) => panic!(
                "{}: Expected Story, found {}",
                self.context,
                self.entry.node_type()
            ),
        }
    }

    /// Assert this entry is a Bug and return sub-item assertions for it
    pub fn assert_bug(self) -> SubitemAssertion<'a> {
        match self.entry {
            Entry::Bug(bug) => SubitemAssertion {
                subitem: bug,
                context: self.context,
            },
            Entry::Story(_) => panic!(
                "{}: Expected Bug, found {}",
                self.context,
                self.entry.node_type()
            ),
        }
    }
}

// ============================================================================
// Story Assertions
// ============================================================================

pub struct StoryAssertion<'a> {
    story: &'a Story,
    context: String,
}

impl<'a> StoryAssertion<'a> {
    pub fn who(self, expected: &str) -> Self {
        assert_eq!(
            self.story.who, expected,
            "{}: Expected who '{}', found '{}'",
            self.context, expected, self.story.who
        );
        self
    }

    pub fn what(self, expected: &str) -> Self {
        assert_eq!(
            self.story.what, expected,
            "{}: Expected what '{}', found '{}'",
            self.context, expected, self.story.what
        );
        self
    }

    pub fn why(self, expected: &str) -> Self {
        assert_eq!(
            self.story.why, expected,
            "{}: Expected why '{}', found '{}'",
            self.context, expected, self.story.why
        );
        self
    }

    pub fn sizes(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.story.sizes, expected,
            "{}: Story sizes differ",
            self.context
        );
        self
    }

    pub fn raw(self, expected: &str) -> Self {
        assert_eq!(self.story.raw, expected, "{}: Raw line differs", self.context);
        self
    }

    /// Assert the story starts on the given (zero-based) line
    pub fn at_line(self, expected: usize) -> Self {
        assert_eq!(
            self.story.location.start.line, expected,
            "{}: Expected story at line {}",
            self.context, expected
        );
        self
    }

    pub fn subitem_count(self, expected: usize) -> Self {
        let actual = self.story.subitems.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} sub-items, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn subitem<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SubitemAssertion<'a>),
    {
        assert!(
            index < self.story.subitems.len(),
            "{}: Sub-item index {} out of bounds (story has {} sub-items)",
            self.context,
            index,
            self.story.subitems.len()
        );

        assertion(SubitemAssertion {
            subitem: &self.story.subitems[index],
            context: format!("{}.subitems[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Sub-item Assertions
// ============================================================================

pub struct SubitemAssertion<'a> {
    subitem: &'a Subitem,
    context: String,
}

impl SubitemAssertion<'_> {
    pub fn raw(self, expected: &str) -> Self {
        assert_eq!(
            self.subitem.raw, expected,
            "{}: Raw line differs",
            self.context
        );
        self
    }

    pub fn fragments(self, expected: &[Fragment]) -> Self {
        assert_eq!(
            self.subitem.fragments, expected,
            "{}: Fragments differ",
            self.context
        );
        self
    }

    pub fn hashtags(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.subitem.hashtags().map(|f| f.raw.as_str()).collect();
        assert_eq!(actual, expected, "{}: Hashtags differ", self.context);
        self
    }

    pub fn mentions(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.subitem.mentions().map(|f| f.raw.as_str()).collect();
        assert_eq!(actual, expected, "{}: Mentions differ", self.context);
        self
    }

    pub fn sizes(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.subitem.sizes, expected,
            "{}: Sizes differ",
            self.context
        );
        self
    }

    pub fn no_sizes(self) -> Self {
        assert!(
            !self.subitem.is_sized(),
            "{}: Expected no sizes, found {:?}",
            self.context,
            self.subitem.sizes
        );
        self
    }
}

fn summarize_groups(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|g| format!("{} ({})", g.key, g.entries.len()))
        .collect::<Vec<_>>()
        .join(", ")
}
