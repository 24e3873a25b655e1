//! Locating view sources for spec categories.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default extension of generated view files.
pub const DEFAULT_VIEW_EXTENSION: &str = "dart";

/// Source text for a category's view, if one exists.
#[derive(Debug, Clone)]
pub struct ViewFile {
    /// Where the view was read from, for diagnostics.
    pub path: PathBuf,
    /// Full source text.
    pub content: String,
}

/// Provides the view source for a category key.
///
/// Returning `None` means the category has no view yet.
pub trait ViewSource {
    fn view_for(&self, category: &str) -> Option<ViewFile>;
}

/// Views stored as `<dir>/<category>.<extension>`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source reading `.dart` files from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(dir, DEFAULT_VIEW_EXTENSION)
    }

    /// Create a source with a custom file extension.
    pub fn with_extension(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the view for `category` would live at.
    pub fn path_for(&self, category: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", category, self.extension))
    }
}

impl ViewSource for DirectorySource {
    fn view_for(&self, category: &str) -> Option<ViewFile> {
        let path = self.path_for(category);
        if !path.is_file() {
            tracing::debug!("No view file at {}", path.display());
            return None;
        }

        // Accessor declarations are ASCII; invalid UTF-8 elsewhere is replaced.
        match fs::read(&path) {
            Ok(bytes) => {
                let content = match String::from_utf8_lossy(&bytes) {
                    Cow::Borrowed(text) => text.to_string(),
                    Cow::Owned(text) => {
                        tracing::debug!("Replaced invalid UTF-8 in {}", path.display());
                        text
                    }
                };
                Some(ViewFile { path, content })
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable view {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// In-memory views keyed by category, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    views: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a view for `category`.
    pub fn with_view(mut self, category: impl Into<String>, content: impl Into<String>) -> Self {
        self.views.insert(category.into(), content.into());
        self
    }
}

impl ViewSource for MemorySource {
    fn view_for(&self, category: &str) -> Option<ViewFile> {
        self.views.get(category).map(|content| ViewFile {
            path: PathBuf::from(format!("{}.{}", category, DEFAULT_VIEW_EXTENSION)),
            content: content.clone(),
        })
    }
}
