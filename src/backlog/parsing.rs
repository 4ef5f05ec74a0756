//! Parsing
//!
//!     The stateful half of the pipeline.
//!
//!     Story Extraction:
//!         The who / what / why state machine. See [story](story).
//!
//!     Sub-item Tokenizing:
//!         Fragments and sizes for indented lines and bugs. See [subitem](subitem).
//!
//!     Document Assembly:
//!         The line fold that ties classification, extraction and grouping together.
//!         See [document](document).
//!
//!     Parsing is a pure function of the input text: every call builds its own state, so
//!     the same text always yields an equal [Parsed] and independent inputs can be parsed
//!     from any number of threads.

pub mod document;
pub mod story;
pub mod subitem;
pub mod title_case;

use crate::backlog::ast::{Diagnostic, Document};
use serde::Serialize;

pub use story::{extract_story, extract_triplet, Triplet};
pub use subitem::parse_subitem;
pub use title_case::title_case;

/// The outcome of one parse: the document and everything worth telling the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// The document if no error diagnostics were raised, the diagnostics otherwise
    pub fn into_result(self) -> Result<Document, Vec<Diagnostic>> {
        if self.has_errors() {
            Err(self.diagnostics)
        } else {
            Ok(self.document)
        }
    }
}

/// Parse backlog text
pub fn parse(source: &str) -> Parsed {
    let (document, diagnostics) = document::parse_lines(source);
    Parsed {
        document,
        diagnostics,
    }
}

/// Parse backlog text, keeping only the document. Diagnostics are still logged.
pub fn parse_document(source: &str) -> Document {
    parse(source).document
}
