//! Cross-checking spec catalogs against generated views.
//!
//! [`ViewChecker`] walks a catalog category by category, extracts the
//! accessors from each category's view and compares every mapped entry's
//! `required` flag against the accessor's selection idiom:
//!
//! - `required: true` must use `.first`
//! - `required: false` (or omitted) must use `.firstOrNull`
//!
//! # Example
//!
//! ```
//! use viewspec::check::ViewChecker;
//! use viewspec::spec::{parse_catalog, CatalogKind};
//! use viewspec::views::MemorySource;
//! use std::path::Path;
//!
//! let catalog = parse_catalog(
//!     r#"{"battery": {"properties": {"level": {"required": true}}}}"#,
//!     CatalogKind::Channels,
//!     Path::new("channels.json"),
//! )
//! .unwrap();
//! let views = MemorySource::new().with_view(
//!     "battery",
//!     "LevelChannelPropertyView get level => properties.whereType<LevelChannelPropertyView>().first;",
//! );
//!
//! let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &views);
//! assert!(outcome.passed());
//! assert_eq!(outcome.checked_count(), 1);
//! ```

pub mod checker;
pub mod coverage;
pub mod mismatch;

pub use checker::{CheckOutcome, CheckedEntry, ViewChecker};
pub use coverage::{unmapped_keys, UnmappedKey};
pub use mismatch::{Location, Mismatch};
