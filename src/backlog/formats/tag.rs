//! XML-like tag serialization
//!
//! Serializes the document to nested tags that mirror the tree. Uses the Visitor pattern so
//! every node type is handled in one place.
//!
//! ## Format
//!
//! - Node type → tag name, scalar fields → attributes
//! - Sizes → `<size>` children
//! - Fragments → `<hashtag>`, `<mention>` or `<text>` with the raw text as content
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <group key="Backlog">
//!     <story who="user" what="to login" why="i can access my account">
//!       <subitem>
//!         <text>Remember session </text>
//!         <hashtag>#security</hashtag>
//!       </subitem>
//!     </story>
//!   </group>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::backlog::ast::{Document, Fragment, Group, Story, Subitem, Visitor};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn line(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        let attributes: String = attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_xml(value)))
            .collect();
        self.line(&format!("<{tag}{attributes}>"));
        self.indent_level += 1;
    }

    fn close(&mut self, tag: &str) {
        self.indent_level -= 1;
        self.line(&format!("</{tag}>"));
    }

    fn tag_with_text(&mut self, tag: &str, text: &str) {
        self.line(&format!("<{tag}>{}</{tag}>", escape_xml(text)));
    }

    fn sizes(&mut self, sizes: &[String]) {
        for size in sizes {
            self.tag_with_text("size", size);
        }
    }
}

impl Visitor for TagSerializer {
    fn visit_document(&mut self, _document: &Document) {
        self.open("document", &[]);
    }

    fn leave_document(&mut self, _document: &Document) {
        self.close("document");
    }

    fn visit_group(&mut self, group: &Group) {
        self.open("group", &[("key", group.key.as_str())]);
    }

    fn leave_group(&mut self, _group: &Group) {
        self.close("group");
    }

    fn visit_story(&mut self, story: &Story) {
        self.open(
            "story",
            &[
                ("who", story.who.as_str()),
                ("what", story.what.as_str()),
                ("why", story.why.as_str()),
            ],
        );
        self.sizes(&story.sizes);
    }

    fn leave_story(&mut self, _story: &Story) {
        self.close("story");
    }

    fn visit_bug(&mut self, bug: &Subitem) {
        self.open("bug", &[]);
        self.sizes(&bug.sizes);
    }

    fn leave_bug(&mut self, _bug: &Subitem) {
        self.close("bug");
    }

    fn visit_subitem(&mut self, subitem: &Subitem) {
        self.open("subitem", &[]);
        self.sizes(&subitem.sizes);
    }

    fn leave_subitem(&mut self, _subitem: &Subitem) {
        self.close("subitem");
    }

    fn visit_fragment(&mut self, fragment: &Fragment) {
        self.tag_with_text(&fragment.kind.to_string(), &fragment.raw);
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn to_tag_str(doc: &Document) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 0,
    };
    doc.accept(&mut serializer);
    serializer.output
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_tag_str(doc))
    }

    fn description(&self) -> &str {
        "XML-like nested tags mirroring the document tree"
    }
}
