//! Testing utilities for backlog assertions
//!
//! # Parser Testing Guidelines
//!
//! Two tools are meant to be used together:
//!
//! 1. **[samples]** - verified backlog documents under `docs/samples/`
//! 2. **[assert_backlog](fn@assert_backlog)** - fluent verification of the parsed tree
//!
//! ## Rule 1: Prefer Sample Documents
//!
//! Story lines are easy to get subtly wrong: a lower-case word breaks a segment, a stray
//! digit ends the scan. Documents that exercise the whole pipeline live in
//! `docs/samples/` and are loaded by name, so when the format changes there is one place
//! to update.
//!
//! ```rust-example
//! use storied::backlog::testing::samples;
//!
//! let parsed = samples::parse_sample("010-sprints.txt");
//! ```
//!
//! Short inline sources are fine for unit tests of a single rule.
//!
//! ## Rule 2: Assert Shape and Content Together
//!
//! Counting groups says little. The fluent API checks the tree and the field values in
//! one expression:
//!
//! ```rust-example
//! use storied::backlog::testing::assert_backlog;
//!
//! assert_backlog(&parsed.document)
//!     .group_count(1)
//!     .group(0, |group| {
//!         group.key("Backlog").entry_count(1).entry(0, |entry| {
//!             entry
//!                 .assert_story()
//!                 .who("user")
//!                 .what("to login")
//!                 .why("i can access my account")
//!                 .subitem(0, |item| {
//!                     item.hashtags(&["#security"]).mentions(&["@alice"]);
//!                 });
//!         });
//!     });
//! ```

mod assertions;
pub mod samples;

pub use assertions::{
    assert_backlog, DocumentAssertion, EntryAssertion, GroupAssertion, StoryAssertion,
    SubitemAssertion,
};
