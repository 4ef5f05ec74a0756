//! AST traits - Common interfaces for uniform node access
//!
//! [AstNode] gives every node a type name, a one-line label and a location. [Visitor]
//! walks a document in source order; the text formats are built on it.

use super::elements::{Document, Entry, Fragment, Group, Story, Subitem};
use super::range::Range;

/// Uniform access to node information
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn range(&self) -> &Range;
}

impl AstNode for Group {
    fn node_type(&self) -> &'static str {
        "Group"
    }

    fn display_label(&self) -> String {
        self.key.clone()
    }

    fn range(&self) -> &Range {
        &self.location
    }
}

impl AstNode for Story {
    fn node_type(&self) -> &'static str {
        "Story"
    }

    fn display_label(&self) -> String {
        self.summary()
    }

    fn range(&self) -> &Range {
        &self.location
    }
}

impl AstNode for Subitem {
    fn node_type(&self) -> &'static str {
        "Subitem"
    }

    fn display_label(&self) -> String {
        self.raw.clone()
    }

    fn range(&self) -> &Range {
        &self.location
    }
}

impl AstNode for Entry {
    fn node_type(&self) -> &'static str {
        match self {
            Entry::Story(story) => story.node_type(),
            Entry::Bug(_) => "Bug",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Entry::Story(story) => story.display_label(),
            Entry::Bug(bug) => bug.display_label(),
        }
    }

    fn range(&self) -> &Range {
        self.location()
    }
}

/// Visitor trait for traversing a document
///
/// Default implementations are empty, so only the methods of interest need overriding.
///
/// ```ignore
/// struct CountTags(usize);
///
/// impl Visitor for CountTags {
///     fn visit_fragment(&mut self, fragment: &Fragment) {
///         if fragment.is_hashtag() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait Visitor {
    fn visit_document(&mut self, _document: &Document) {}
    fn leave_document(&mut self, _document: &Document) {}

    fn visit_group(&mut self, _group: &Group) {}
    fn leave_group(&mut self, _group: &Group) {}

    fn visit_story(&mut self, _story: &Story) {}
    fn leave_story(&mut self, _story: &Story) {}

    fn visit_bug(&mut self, _bug: &Subitem) {}
    fn leave_bug(&mut self, _bug: &Subitem) {}

    fn visit_subitem(&mut self, _subitem: &Subitem) {}
    fn leave_subitem(&mut self, _subitem: &Subitem) {}

    fn visit_fragment(&mut self, _fragment: &Fragment) {}
}

impl Document {
    /// Walk the document depth-first in source order
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        for group in &self.groups {
            visitor.visit_group(group);
            for entry in &group.entries {
                match entry {
                    Entry::Story(story) => {
                        visitor.visit_story(story);
                        for subitem in &story.subitems {
                            visitor.visit_subitem(subitem);
                            visit_fragments(visitor, &subitem.fragments);
                            visitor.leave_subitem(subitem);
                        }
                        visitor.leave_story(story);
                    }
                    Entry::Bug(bug) => {
                        visitor.visit_bug(bug);
                        visit_fragments(visitor, &bug.fragments);
                        visitor.leave_bug(bug);
                    }
                }
            }
            visitor.leave_group(group);
        }
        visitor.leave_document(self);
    }
}

fn visit_fragments(visitor: &mut dyn Visitor, fragments: &[Fragment]) {
    for fragment in fragments {
        visitor.visit_fragment(fragment);
    }
}
