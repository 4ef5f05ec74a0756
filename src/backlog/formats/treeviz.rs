//! Treeviz formatter
//!
//! Treeviz is a one-line-per-node rendering of the parsed tree. Nesting is drawn with
//! box connectors, two columns per level:
//!
//! <linum?><prefix><connector> <icon> <label>
//!
//! Example:
//!
//!   ⧉ 1 group
//!   └─ § Backlog
//!     └─ ¶ user / to login / i can access my account
//!       └─ • Remember session #security @alice
//!
//! Icons
//!     Document: ⧉
//!     Group: §
//!     Story: ¶
//!     Bug: ✗
//!     Subitem: •
//!
//! Stories show their sizes after the triplet as `[3, 5]`; sub-items and bugs show their
//! raw line, markers included.

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::backlog::ast::{AstNode, Document, Entry, Subitem};

/// Intermediate tree so the connector logic only exists once
struct Node {
    icon: &'static str,
    label: String,
    line: usize,
    children: Vec<Node>,
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Group" => "§",
        "Story" => "¶",
        "Bug" => "✗",
        "Subitem" => "•",
        _ => "○",
    }
}

fn with_sizes(label: String, sizes: &[String]) -> String {
    if sizes.is_empty() {
        label
    } else {
        format!("{} [{}]", label, sizes.join(", "))
    }
}

fn subitem_node(subitem: &Subitem) -> Node {
    Node {
        icon: get_icon(subitem.node_type()),
        label: subitem.display_label(),
        line: subitem.location.line(),
        children: Vec::new(),
    }
}

fn entry_node(entry: &Entry) -> Node {
    let (label, children) = match entry {
        Entry::Story(story) => (
            with_sizes(story.display_label(), &story.sizes),
            story.subitems.iter().map(subitem_node).collect(),
        ),
        Entry::Bug(bug) => (bug.display_label(), Vec::new()),
    };
    Node {
        icon: get_icon(entry.node_type()),
        label,
        line: entry.location().line(),
        children,
    }
}

fn document_nodes(doc: &Document) -> Vec<Node> {
    doc.groups
        .iter()
        .map(|group| Node {
            icon: get_icon(group.node_type()),
            label: group.display_label(),
            line: group.location.line(),
            children: group.entries.iter().map(entry_node).collect(),
        })
        .collect()
}

fn format_node(
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    options: &FormatOptions,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let linum_prefix = if options.show_line_numbers {
        format!("{:02} ", node.line + 1)
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum_prefix,
        prefix,
        connector,
        node.icon,
        truncate(&node.label, options.label_width)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        output.push_str(&format_node(child, &child_prefix, i, child_count, options));
    }

    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_options(doc, &FormatOptions::default())
}

pub fn to_treeviz_str_with_options(doc: &Document, options: &FormatOptions) -> String {
    let count = doc.groups.len();
    let noun = if count == 1 { "group" } else { "groups" };
    let mut output = format!("{} {} {}\n", get_icon("Document"), count, noun);

    let nodes = document_nodes(doc);
    for (i, node) in nodes.iter().enumerate() {
        output.push_str(&format_node(node, "", i, nodes.len(), options));
    }

    output
}

pub struct TreevizFormatter {
    pub options: FormatOptions,
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(doc, &self.options))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlog::parsing::parse_document;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_treeviz_str(&Document::default()), "⧉ 0 groups\n");
    }

    #[test]
    fn test_siblings_use_tee_connector() {
        let doc = parse_document("# One\nA x B x C\n#bug oops [2]\n# Two\n\n");
        let output = to_treeviz_str(&doc);
        let expected = "⧉ 2 groups\n\
                        ├─ § One\n\
                        │ ├─ ¶ a / b / c\n\
                        │ └─ ✗ #bug oops [2]\n\
                        └─ § Two\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_line_numbers() {
        let doc = parse_document("# One\nA x B x C\n");
        let options = FormatOptions {
            show_line_numbers: true,
            ..FormatOptions::default()
        };
        let output = to_treeviz_str_with_options(&doc, &options);
        assert_eq!(output, "⧉ 1 group\n02 └─ § One\n02   └─ ¶ a / b / c\n");
    }
}
