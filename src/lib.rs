//! # storied
//!
//! A parser for plain-text user story backlogs.
//!
//! File Layout
//!
//! The library follows a lexing / parsing split. Lexing holds everything that looks at
//! characters in isolation (line classification, size markers, the fragment lexer). Parsing
//! holds everything that carries state (the story state machine and the document fold).
//!
//! src/backlog
//!   ├── ast        Groups, entries, sub-items, fragments and diagnostics
//!   ├── lexing     Line classification, size markers, fragment tokens
//!   ├── parsing    Story extraction, sub-item tokenizing, document assembly
//!   ├── formats    json, yaml, treeviz and tag output
//!   ├── config     Layered configuration for the binary
//!   ├── loader     Source providers and refresh-aware document loading
//!   └── testing    Fluent assertions and sample documents
//!
//! For testing guidelines, see the [testing module](backlog::testing).

pub mod backlog;

pub use backlog::parsing::{parse, parse_document, Parsed};
