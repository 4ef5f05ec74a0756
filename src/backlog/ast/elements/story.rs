//! Story element
//!
//!     A story is a who / what / why triplet recovered from a capitalized sentence such as
//!     `AS A USER I WANT TO LOGIN SO THAT I CAN ACCESS MY ACCOUNT`. The three fields are
//!     cleaned and lower-cased; `raw` keeps the line as written (trimmed, bullet removed).

use super::super::range::Range;
use super::subitem::Subitem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub who: String,
    pub what: String,
    pub why: String,
    pub sizes: Vec<String>,
    pub raw: String,
    pub subitems: Vec<Subitem>,
    pub location: Range,
}

impl Story {
    pub fn new(
        who: impl Into<String>,
        what: impl Into<String>,
        why: impl Into<String>,
        sizes: Vec<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            who: who.into(),
            what: what.into(),
            why: why.into(),
            sizes,
            raw: raw.into(),
            subitems: Vec::new(),
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn is_sized(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// One-line label used by the text formats
    pub fn summary(&self) -> String {
        format!("{} / {} / {}", self.who, self.what, self.why)
    }
}
