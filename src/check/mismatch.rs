//! Required/nullable mismatches.
//!
//! A [`Mismatch`] is produced when a spec entry's `required` flag disagrees
//! with the selection idiom its view accessor uses.

use std::fmt;
use std::path::PathBuf;

use crate::views::Selection;

/// Where an accessor was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// View file path.
    pub file: PathBuf,
    /// Line of the declaration (1-indexed).
    pub line: usize,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// A disagreement between the spec and a view accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Category key, e.g. `battery`.
    pub category: String,
    /// Sub-entity key, e.g. `level`.
    pub key: String,
    /// Spec `required` flag.
    pub required: bool,
    /// Selection the view accessor actually uses.
    pub observed: Selection,
    /// Where the accessor was declared.
    pub location: Option<Location>,
}

impl Mismatch {
    /// Compare a spec flag against an observed selection.
    ///
    /// Returns `None` when they agree.
    pub fn detect(
        category: &str,
        key: &str,
        required: bool,
        observed: Selection,
    ) -> Option<Mismatch> {
        if required != observed.is_nullable() {
            return None;
        }
        Some(Mismatch {
            category: category.to_string(),
            key: key.to_string(),
            required,
            observed,
            location: None,
        })
    }

    /// Attach the accessor location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// The selection the view should use instead.
    pub fn expected(&self) -> Selection {
        if self.required {
            Selection::First
        } else {
            Selection::FirstOrNull
        }
    }

    /// Short fix hint naming the Dart member to switch to.
    pub fn suggestion(&self) -> String {
        format!(
            "use `{}` instead of `{}`",
            self.expected().member(),
            self.observed.member()
        )
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(
                f,
                "{}.{}: spec=required, view uses nullable accessor (should use non-null)",
                self.category, self.key
            )
        } else {
            write!(
                f,
                "{}.{}: spec=optional, view uses non-null accessor (should use nullable)",
                self.category, self.key
            )
        }
    }
}
