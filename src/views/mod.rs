//! Generated view sources.
//!
//! - [`accessor`] - extracting typed accessor declarations from a view
//! - [`names`] - the fixed spec-key to view-type tables
//! - [`source`] - finding the view file for a category

pub mod accessor;
pub mod names;
pub mod source;

pub use accessor::{extract_accessors, Accessor, AccessorRecord, Selection};
pub use names::{view_name, CHANNEL_VIEW_NAMES, PROPERTY_VIEW_NAMES};
pub use source::{DirectorySource, MemorySource, ViewFile, ViewSource, DEFAULT_VIEW_EXTENSION};
