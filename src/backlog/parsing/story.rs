//! Story extraction
//!
//!     A story line reads like "AS A USER I WANT TO LOGIN SO THAT I CAN ACCESS MY ACCOUNT":
//!     three capitalized segments joined by connectives. Extraction runs the pieces from
//!     [lex_story] through a three-state machine:
//!
//!         Who  --link | WANT-->  What  --link | SO THAT-->  Why
//!
//!     Transitions:
//!         Who:  words accumulate. A link or WANT/NEED moves on once something was
//!               collected; a link with nothing collected is ignored. A break restarts.
//!         What: words accumulate. WANT/NEED right at the start (nothing, or only "I",
//!               collected) is absorbed. A link or SO THAT moves on once something was
//!               collected. A break restarts.
//!         Why:  words accumulate into the current piece; a link opens a new piece and
//!               SO THAT right at the start is absorbed. A break ends the scan.
//!
//!     Connectives that do not trigger a transition stay in the text as literal words. The
//!     scan succeeds only when it ends inside Why with some text collected.
//!
//!     Cleaning: the who segment loses a leading "as a" / "as an" and a trailing pronoun
//!     "I" (whole words, any case). Every segment drops commas, collapses whitespace and
//!     is lower-cased. The why pieces are joined with single spaces.
//!
//!     Size markers are read from the whole line first and removed before the state
//!     machine sees the text.

use crate::backlog::ast::Story;
use crate::backlog::lexing::{extract_sizes, lex_story, Piece};

/// The cleaned who / what / why segments of a story line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triplet {
    pub who: String,
    pub what: String,
    pub why: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Who(Vec<String>),
    What {
        who: Vec<String>,
        what: Vec<String>,
    },
    Why {
        who: Vec<String>,
        what: Vec<String>,
        pieces: Vec<Vec<String>>,
    },
    Done {
        who: Vec<String>,
        what: Vec<String>,
        pieces: Vec<Vec<String>>,
    },
}

impl State {
    fn start() -> Self {
        State::Who(Vec::new())
    }

    fn step(self, piece: &Piece) -> Self {
        match (self, piece) {
            (done @ State::Done { .. }, _) => done,

            (State::Who(mut who), Piece::Word(word)) => {
                who.push(word.clone());
                State::Who(who)
            }
            (State::Who(who), Piece::Link(_) | Piece::Want(_)) if !who.is_empty() => {
                State::What {
                    who,
                    what: Vec::new(),
                }
            }
            (State::Who(mut who), Piece::Want(word)) => {
                who.push(word.clone());
                State::Who(who)
            }
            (State::Who(mut who), Piece::SoThat) => {
                push_so_that(&mut who);
                State::Who(who)
            }
            (State::Who(_), Piece::Link(_) | Piece::Break) => State::start(),

            (State::What { who, mut what }, Piece::Word(word)) => {
                what.push(word.clone());
                State::What { who, what }
            }
            (State::What { who, what }, Piece::Want(_)) if is_pronoun_only(&what) => {
                State::What {
                    who,
                    what: Vec::new(),
                }
            }
            (State::What { who, mut what }, Piece::Want(word)) => {
                what.push(word.clone());
                State::What { who, what }
            }
            (State::What { who, what }, Piece::Link(_) | Piece::SoThat) if !what.is_empty() => {
                State::Why {
                    who,
                    what,
                    pieces: vec![Vec::new()],
                }
            }
            (State::What { who, mut what }, Piece::SoThat) => {
                push_so_that(&mut what);
                State::What { who, what }
            }
            (State::What { who, what }, Piece::Link(_)) => State::What { who, what },
            (State::What { .. }, Piece::Break) => State::start(),

            (State::Why { who, what, pieces }, Piece::SoThat) if is_blank(&pieces) => {
                State::Why { who, what, pieces }
            }
            (
                State::Why {
                    who,
                    what,
                    mut pieces,
                },
                Piece::Word(_) | Piece::Want(_) | Piece::SoThat,
            ) => {
                if let Some(current) = pieces.last_mut() {
                    match piece {
                        Piece::Word(word) | Piece::Want(word) => current.push(word.clone()),
                        _ => push_so_that(current),
                    }
                }
                State::Why { who, what, pieces }
            }
            (
                State::Why {
                    who,
                    what,
                    mut pieces,
                },
                Piece::Link(_),
            ) => {
                if pieces.last().is_some_and(|current| !current.is_empty()) {
                    pieces.push(Vec::new());
                }
                State::Why { who, what, pieces }
            }
            (State::Why { who, what, pieces }, Piece::Break) => State::Done { who, what, pieces },
        }
    }

    fn finish(self) -> Option<Triplet> {
        let (who, what, pieces) = match self {
            State::Why { who, what, pieces } | State::Done { who, what, pieces } => {
                (who, what, pieces)
            }
            State::Who(_) | State::What { .. } => return None,
        };

        let why = pieces
            .iter()
            .map(|piece| clean_words(piece))
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if why.is_empty() {
            return None;
        }

        Some(Triplet {
            who: clean_who(&who),
            what: clean_words(&what),
            why,
        })
    }
}

fn push_so_that(words: &mut Vec<String>) {
    words.push("SO".to_string());
    words.push("THAT".to_string());
}

fn is_pronoun_only(words: &[String]) -> bool {
    match words {
        [] => true,
        [only] => only.eq_ignore_ascii_case("i"),
        _ => false,
    }
}

fn is_blank(pieces: &[Vec<String>]) -> bool {
    pieces.iter().all(|piece| piece.is_empty())
}

fn clean_who(words: &[String]) -> String {
    let mut words: &[String] = words;
    if let [first, second, rest @ ..] = words {
        if first.eq_ignore_ascii_case("as")
            && (second.eq_ignore_ascii_case("a") || second.eq_ignore_ascii_case("an"))
        {
            words = rest;
        }
    }
    if let [rest @ .., last] = words {
        if last.eq_ignore_ascii_case("i") {
            words = rest;
        }
    }
    clean_words(words)
}

fn clean_words(words: &[String]) -> String {
    words
        .iter()
        .map(|word| word.replace(',', ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Run the triplet state machine over `text`
pub fn extract_triplet(text: &str) -> Option<Triplet> {
    lex_story(text)
        .iter()
        .fold(State::start(), State::step)
        .finish()
}

/// Extract a story from a trimmed, bullet-stripped line. `raw` keeps the line as given.
pub fn extract_story(candidate: &str) -> Option<Story> {
    let sizes = extract_sizes(candidate);
    let triplet = extract_triplet(&sizes.remainder)?;
    Some(Story::new(
        triplet.who,
        triplet.what,
        triplet.why,
        sizes.labels,
        candidate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triplet(who: &str, what: &str, why: &str) -> Option<Triplet> {
        Some(Triplet {
            who: who.to_string(),
            what: what.to_string(),
            why: why.to_string(),
        })
    }

    #[test]
    fn test_all_caps_story() {
        assert_eq!(
            extract_triplet("AS A USER I WANT TO LOGIN SO THAT I CAN ACCESS MY ACCOUNT"),
            triplet("user", "to login", "i can access my account")
        );
    }

    #[test]
    fn test_size_marker_is_stripped() {
        let story =
            extract_story("AS A USER I WANT TO LOGIN [3] SO THAT I CAN ACCESS MY ACCOUNT").unwrap();
        assert_eq!(story.sizes, vec!["3"]);
        assert_eq!(story.what, "to login");
        assert_eq!(story.why, "i can access my account");
        assert_eq!(
            story.raw,
            "AS A USER I WANT TO LOGIN [3] SO THAT I CAN ACCESS MY ACCOUNT"
        );
        assert!(story.subitems.is_empty());
    }

    #[test]
    fn test_comma_links() {
        assert_eq!(
            extract_triplet("AS A USER, I WANT TO LOGIN, SO THAT I CAN ACCESS MY ACCOUNT"),
            triplet("user", "to login", "i can access my account")
        );
    }

    #[test]
    fn test_single_letter_links() {
        assert_eq!(
            extract_triplet("ADMIN x EXPORT REPORTS x AUDITS PASS"),
            triplet("admin", "export reports", "audits pass")
        );
    }

    #[test]
    fn test_why_pieces_rejoin_with_single_spaces() {
        assert_eq!(
            extract_triplet("AS A USER I WANT SEARCH SO THAT I FIND THINGS, AND SHARE THEM"),
            triplet("user", "search", "i find things and share them")
        );
    }

    #[test]
    fn test_embedded_i_in_who_is_kept() {
        assert_eq!(
            extract_triplet("AS AN IT ADMIN I NEED AUDIT LOGS SO THAT I CAN TRACE CHANGES"),
            triplet("it admin", "audit logs", "i can trace changes")
        );
        assert_eq!(
            extract_triplet("AS A USER IN INDIA I WANT RUPEES SO THAT I CAN PAY"),
            triplet("user in india", "rupees", "i can pay")
        );
    }

    #[test]
    fn test_as_a_only_stripped_from_who() {
        assert_eq!(
            extract_triplet("AS A LEAD I WANT TO WORK AS A TEAM SO THAT WE SHIP AS A UNIT"),
            triplet("lead", "to work as a team", "we ship as a unit")
        );
    }

    #[test]
    fn test_break_restarts_before_why() {
        assert_eq!(
            extract_triplet("Story 12: AS A USER I WANT TO LOGIN SO THAT I CAN"),
            triplet("user", "to login", "i can")
        );
    }

    #[test]
    fn test_break_ends_why() {
        assert_eq!(
            extract_triplet("AS A USER I WANT TO LOGIN SO THAT I CAN 2 times"),
            triplet("user", "to login", "i can")
        );
    }

    #[test]
    fn test_connective_keywords_stay_literal_in_why() {
        assert_eq!(
            extract_triplet("AS A USER I WANT X SO THAT I NEED NOTHING SO THAT IS FINE"),
            triplet("user", "x", "i need nothing so that is fine")
        );
    }

    #[rstest]
    #[case("")]
    #[case("Backlog")]
    #[case("Remember to water the plants")]
    #[case("AS A USER I WANT TO LOGIN")]
    #[case("ONLY CAPITALS WITHOUT CONNECTIVES")]
    #[case("AS A USER I WANT TO LOGIN SO THAT")]
    #[case("[3] [5]")]
    fn test_lines_without_a_triplet(#[case] line: &str) {
        assert_eq!(extract_triplet(line), None);
    }
}
