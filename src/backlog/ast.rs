//! Abstract syntax tree for backlog documents
//!
//!     A parsed backlog is flat compared to most document trees: a document holds groups,
//!     groups hold entries, and stories hold sub-items. Fragments are the leaves.
//!
//!     Document
//!       └── Group            one per normalized heading name
//!             ├── Story      who / what / why triplet plus sizes
//!             │     └── Subitem   indented detail line, split into fragments
//!             └── Bug        a sub-item shaped line filed directly in the group
//!
//!     Every node carries a mandatory [Range] pointing at its source line. Diagnostics
//!     produced while parsing live in [diagnostics] and are returned next to the document,
//!     never inside it.

pub mod diagnostics;
pub mod elements;
pub mod range;
pub mod traits;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSeverity};
pub use elements::{Document, Entry, Fragment, FragmentKind, Group, Story, Subitem};
pub use range::{Position, Range, SourceLocation};
pub use traits::{AstNode, Visitor};
