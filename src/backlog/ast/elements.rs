//! Element definitions for backlog documents
//!
//!     Blocks:
//!         Groups are the only container at the top level. See [group](group).
//!         Entries are what a group holds, either a story or a bug. See [entry](entry).
//!
//!     Lines:
//!         Stories and sub-items each map to exactly one source line. See [story](story) and
//!         [subitem](subitem). A bug reuses the sub-item shape.
//!
//!     Spans:
//!         Fragments are the classified pieces of a sub-item line. See [fragment](fragment).

pub mod document;
pub mod entry;
pub mod fragment;
pub mod group;
pub mod story;
pub mod subitem;

pub use document::Document;
pub use entry::Entry;
pub use fragment::{Fragment, FragmentKind};
pub use group::Group;
pub use story::Story;
pub use subitem::Subitem;
