//! Story pieces
//!
//! Lexes a story candidate into the pieces the story state machine consumes. Characters
//! fall into three classes:
//!
//!     Segment: ASCII uppercase letters, whitespace, `'`, `"`, `‘ ’ “ ”`, `(`, `)`, `&`.
//!         Maximal runs are split into words.
//!     Link: ASCII lowercase letters, `.`, `,`, `!`. A lone link character is a
//!         one-character connective between two segments.
//!     Other: digits, brackets, any other symbol or letter.
//!
//! Two or more link characters in a row, or any run of other characters, is a break.
//! Inside segment runs the words `WANT` and `NEED` and the pair `SO THAT` are lifted out as
//! connectives, which is what lets an all-caps sentence be split into who / what / why.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Word(String),
    /// `WANT` or `NEED`, keeping the literal word
    Want(String),
    SoThat,
    Link(char),
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Segment,
    Link,
    Other,
}

fn class_of(c: char) -> CharClass {
    match c {
        'A'..='Z' | '\'' | '"' | '‘' | '’' | '“' | '”' | '(' | ')' | '&' => CharClass::Segment,
        c if c.is_whitespace() => CharClass::Segment,
        'a'..='z' | '.' | ',' | '!' => CharClass::Link,
        _ => CharClass::Other,
    }
}

pub fn lex_story(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(first) = chars.next() {
        let class = class_of(first);
        let mut run = String::from(first);
        while let Some(&next) = chars.peek() {
            if class_of(next) != class {
                break;
            }
            run.push(next);
            chars.next();
        }

        match class {
            CharClass::Segment => push_words(&mut pieces, &run),
            CharClass::Link if run.chars().count() == 1 => pieces.push(Piece::Link(first)),
            CharClass::Link | CharClass::Other => {
                if pieces.last() != Some(&Piece::Break) {
                    pieces.push(Piece::Break);
                }
            }
        }
    }

    pieces
}

fn push_words(pieces: &mut Vec<Piece>, run: &str) {
    let words: Vec<&str> = run.split_whitespace().collect();
    let mut i = 0;
    while i < words.len() {
        match words[i] {
            "WANT" | "NEED" => pieces.push(Piece::Want(words[i].to_string())),
            "SO" if words.get(i + 1) == Some(&"THAT") => {
                pieces.push(Piece::SoThat);
                i += 1;
            }
            word => pieces.push(Piece::Word(word.to_string())),
        }
        i += 1;
    }
}
