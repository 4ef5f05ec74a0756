//! Output formats for parsed backlogs
//!
//!     json, yaml   serde serialization of the document
//!     treeviz      one line per node, for eyeballing structure
//!     tag          XML-like nesting that mirrors the tree
//!
//! All formats are read-only consumers of a [Document](crate::backlog::ast::Document) and
//! are reachable by name through the [FormatRegistry].

pub mod registry;
pub mod serde_formats;
pub mod tag;
pub mod treeviz;

pub use registry::{FormatError, FormatOptions, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use tag::{to_tag_str, TagFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizFormatter};
