//! Lexing
//!
//!     Everything that looks at characters without carrying state between lines.
//!
//!     Line Classification:
//!         Decides what a single source line is (heading, sub-item, bug, story candidate,
//!         blank). The only context it needs is the previous line, for underlined headings.
//!         See [line_classification](line_classification).
//!
//!     Size Markers:
//!         `[label]` estimation markers, pulled out of a line before anything else reads it.
//!         See [sizes](sizes).
//!
//!     Fragment Tokens:
//!         The logos lexer that splits sub-item text into hashtags, mentions and text.
//!         See [fragments](fragments).
//!
//!     Story Pieces:
//!         Character-class runs (capitalized segments, one-character links, breaks and the
//!         WANT / SO THAT connectives) fed to the story state machine.
//!         See [story_pieces](story_pieces).

pub mod fragments;
pub mod line_classification;
pub mod sizes;
pub mod story_pieces;

pub use fragments::{tokenize, FragmentToken};
pub use line_classification::{classify_line, clean, strip_bullet, LineType};
pub use sizes::{extract_sizes, SizeMarkers};
pub use story_pieces::{lex_story, Piece};
