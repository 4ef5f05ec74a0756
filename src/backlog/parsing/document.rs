//! Document assembly
//!
//!     A single forward scan over the source lines, written as a left fold. Each line is
//!     classified, then [ParseState::step] consumes the state and returns the next one.
//!
//!     State:
//!         current_group   cleaned name set by the last heading (None before any heading,
//!                         or after a heading with empty text)
//!         groups          normalized name -> group, in first-materialization order
//!         current_story   handle to the story that indented lines attach to
//!         diagnostics     ungrouped stories and bugs, in line order
//!
//!     Groups are materialized lazily: a heading only records its name, and the group is
//!     created (get-or-insert) when the next non-heading line is processed. A heading that
//!     is immediately followed by another heading therefore never produces a group.
//!
//!     The sub-item window of a story closes at the next heading or bug line. Indented
//!     lines with no open story are dropped.

use super::story::extract_story;
use super::subitem::parse_subitem;
use super::title_case::title_case;
use crate::backlog::ast::{Diagnostic, Document, Entry, Group, Range, SourceLocation, Story};
use crate::backlog::lexing::{classify_line, LineType};
use std::collections::HashMap;
use std::ops::Range as ByteRange;

/// One source line without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceLine<'a> {
    text: &'a str,
    span: ByteRange<usize>,
}

fn source_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for segment in source.split('\n') {
        let text = segment.strip_suffix('\r').unwrap_or(segment);
        lines.push(SourceLine {
            text,
            span: offset..offset + text.len(),
        });
        offset += segment.len() + 1;
    }
    lines
}

/// Stable index of a story inside the group table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StoryHandle {
    group: usize,
    entry: usize,
}

/// Insertion-ordered groups with lookup by normalized name
#[derive(Debug, Default)]
struct GroupTable {
    groups: Vec<Group>,
    by_name: HashMap<String, usize>,
}

impl GroupTable {
    /// Return the index of the group called `name`, creating it if needed
    fn get_or_insert(&mut self, name: &str, location: &Range) -> usize {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }
        let key = title_case(name);
        tracing::debug!(%key, line = location.line() + 1, "materializing group");
        let index = self.groups.len();
        self.groups
            .push(Group::new(name, key).at(location.clone()));
        self.by_name.insert(name.to_string(), index);
        index
    }

    fn push(&mut self, group: usize, entry: Entry) -> StoryHandle {
        let entries = &mut self.groups[group].entries;
        entries.push(entry);
        StoryHandle {
            group,
            entry: entries.len() - 1,
        }
    }

    fn story_mut(&mut self, handle: StoryHandle) -> Option<&mut Story> {
        match self.groups.get_mut(handle.group)?.entries.get_mut(handle.entry)? {
            Entry::Story(story) => Some(story),
            Entry::Bug(_) => None,
        }
    }
}

#[derive(Debug, Default)]
struct ParseState {
    groups: GroupTable,
    current_group: Option<String>,
    current_story: Option<StoryHandle>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseState {
    fn step(mut self, line: &SourceLine<'_>, line_type: LineType, location: Range) -> Self {
        tracing::trace!(line = location.line() + 1, ?line_type, "classified line");

        if let Some(heading) = line_type.heading_text() {
            self.current_group = Some(heading.to_string()).filter(|name| !name.is_empty());
            self.current_story = None;
            return self;
        }

        let active_group = self
            .current_group
            .as_deref()
            .map(|name| self.groups.get_or_insert(name, &location));

        match line_type {
            LineType::Subitem => match self.current_story {
                Some(handle) => {
                    let subitem = parse_subitem(line.text).at(location);
                    if let Some(story) = self.groups.story_mut(handle) {
                        story.subitems.push(subitem);
                    }
                }
                None => {
                    tracing::debug!(
                        line = location.line() + 1,
                        "dropping indented line with no story above it"
                    );
                }
            },
            LineType::Bug(text) => {
                self.current_story = None;
                match active_group {
                    Some(group) => {
                        let bug = parse_subitem(&text).at(location);
                        self.groups.push(group, Entry::Bug(bug));
                    }
                    None => self.report(Diagnostic::ungrouped_bug(location, text)),
                }
            }
            LineType::StoryCandidate(text) => {
                let Some(story) = extract_story(&text) else {
                    return self;
                };
                match active_group {
                    Some(group) => {
                        let handle = self.groups.push(group, Entry::Story(story.at(location)));
                        self.current_story = Some(handle);
                    }
                    None => {
                        self.current_story = None;
                        self.report(Diagnostic::ungrouped_story(location, text));
                    }
                }
            }
            LineType::Blank | LineType::HeadingUnderline(_) | LineType::HeadingMarker(_) => {}
        }

        self
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(code = diagnostic.kind.code(), "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Parse a backlog into groups plus the diagnostics raised along the way
pub fn parse_lines(source: &str) -> (Document, Vec<Diagnostic>) {
    let location = SourceLocation::new(source);
    let lines = source_lines(source);

    let state = lines
        .iter()
        .enumerate()
        .fold(ParseState::default(), |state, (index, line)| {
            let previous = index.checked_sub(1).map(|prev| lines[prev].text);
            let line_type = classify_line(line.text, previous);
            let range = location.byte_range_to_range(&line.span);
            state.step(line, line_type, range)
        });

    (Document::new(state.groups.groups), state.diagnostics)
}
