//! Fragment tokens for sub-item and bug lines
//!
//! The token definitions use the logos derive macro. A tag is `#` or `@` followed by one
//! or more ASCII word characters; a prefix with no word after it is ordinary text.
//! [tokenize] merges neighbouring text tokens so callers see maximal text spans.
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentToken {
    #[regex(r"#[A-Za-z0-9_]+")]
    Hashtag,

    #[regex(r"@[A-Za-z0-9_]+")]
    Mention,

    // Text content (catch-all for anything that cannot start a tag)
    #[regex(r"[^#@]+")]
    Text,

    // A bare prefix, e.g. "C#" or "a @ b"
    #[token("#")]
    #[token("@")]
    StrayPrefix,
}

impl FragmentToken {
    pub fn is_tag(&self) -> bool {
        matches!(self, FragmentToken::Hashtag | FragmentToken::Mention)
    }
}

/// Tokenize a line into tags and maximal text spans, with their byte ranges.
///
/// Stray prefixes are folded into the surrounding text. Every byte of the input belongs
/// to exactly one returned span.
pub fn tokenize(source: &str) -> Vec<(FragmentToken, Range<usize>)> {
    let mut lexer = FragmentToken::lexer(source);
    let mut tokens: Vec<(FragmentToken, Range<usize>)> = Vec::new();

    while let Some(result) = lexer.next() {
        let token = match result {
            Ok(FragmentToken::StrayPrefix) | Err(_) => FragmentToken::Text,
            Ok(token) => token,
        };
        let span = lexer.span();
        match tokens.last_mut() {
            Some((FragmentToken::Text, last)) if token == FragmentToken::Text => {
                last.end = span.end;
            }
            _ => tokens.push((token, span)),
        }
    }

    tokens
}
