//! Sub-item tokenizing
//!
//! Turns one indented detail line (or a `#bug` line) into a [Subitem]:
//!
//! 1. Trim and drop one leading `-` (`raw` is this result).
//! 2. Pull out `[size]` markers and remove them from the working text.
//! 3. Split the rest into hashtags, mentions and text with the fragment lexer, keeping
//!    source order and dropping empty spans.

use crate::backlog::ast::{Fragment, FragmentKind, Subitem};
use crate::backlog::lexing::{extract_sizes, strip_bullet, tokenize, FragmentToken};

pub fn parse_subitem(line: &str) -> Subitem {
    let raw = strip_bullet(line);
    let sizes = extract_sizes(raw);
    let fragments = fragments_of(&sizes.remainder);
    Subitem::new(raw.to_string(), fragments, sizes.labels)
}

fn fragments_of(text: &str) -> Vec<Fragment> {
    tokenize(text)
        .into_iter()
        .filter(|(_, span)| !span.is_empty())
        .map(|(token, span)| {
            let kind = match token {
                FragmentToken::Hashtag => FragmentKind::Hashtag,
                FragmentToken::Mention => FragmentKind::Mention,
                FragmentToken::Text | FragmentToken::StrayPrefix => FragmentKind::Text,
            };
            Fragment::new(kind, &text[span])
        })
        .collect()
}
