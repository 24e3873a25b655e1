//! Catalog loading and parsing.

use super::{CatalogKind, OrderedMap};
use crate::error::{Result, ViewSpecError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A loaded spec catalog: categories in document order.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Which document this catalog came from.
    pub kind: CatalogKind,
    /// Categories in document order.
    pub categories: Vec<Category>,
}

/// One channel or device category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category key, e.g. `battery`.
    pub key: String,
    /// Properties (channel catalog) or channels (device catalog).
    pub entries: Vec<SubEntity>,
}

/// A property or channel defined under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEntity {
    /// Sub-entity key, e.g. `level`.
    pub key: String,
    /// Whether the spec requires this sub-entity to be present.
    pub required: bool,
}

/// Channel catalog category: only `properties` is read.
#[derive(Deserialize)]
struct ChannelCategoryDoc {
    #[serde(default)]
    properties: Option<OrderedMap<EntryDoc>>,
}

/// Device catalog category: only `channels` is read.
#[derive(Deserialize)]
struct DeviceCategoryDoc {
    #[serde(default)]
    channels: Option<OrderedMap<EntryDoc>>,
}

#[derive(Deserialize)]
struct EntryDoc {
    /// `null` and a missing flag both mean optional.
    #[serde(default)]
    required: Option<bool>,
}

impl From<(String, EntryDoc)> for SubEntity {
    fn from((key, entry): (String, EntryDoc)) -> Self {
        Self {
            key,
            required: entry.required.unwrap_or(false),
        }
    }
}

fn to_category(key: String, entries: Option<OrderedMap<EntryDoc>>) -> Category {
    Category {
        key,
        entries: entries
            .unwrap_or_default()
            .into_iter()
            .map(SubEntity::from)
            .collect(),
    }
}

impl Catalog {
    /// Look up a category by key.
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Iterate categories in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns `SpecNotFound` if the file doesn't exist.
/// Returns `SpecParseError` if the JSON is invalid or not catalog-shaped.
pub fn load_catalog(path: &Path, kind: CatalogKind) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ViewSpecError::SpecNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ViewSpecError::Io(e)
        }
    })?;

    let catalog = parse_catalog(&content, kind, path)?;
    tracing::info!(
        "Loaded {} catalog from {} ({} categories)",
        kind,
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Parse catalog JSON.
///
/// # Arguments
///
/// * `content` - The JSON document
/// * `kind` - Selects which nested field holds the sub-entities; the other
///   field is never inspected
/// * `source_path` - Path for error reporting
pub fn parse_catalog(content: &str, kind: CatalogKind, source_path: &Path) -> Result<Catalog> {
    let parse_error = |e: serde_json::Error| ViewSpecError::SpecParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let categories: Vec<Category> = match kind {
        CatalogKind::Channels => serde_json::from_str::<OrderedMap<ChannelCategoryDoc>>(content)
            .map_err(parse_error)?
            .into_iter()
            .map(|(key, def)| to_category(key, def.properties))
            .collect(),
        CatalogKind::Devices => serde_json::from_str::<OrderedMap<DeviceCategoryDoc>>(content)
            .map_err(parse_error)?
            .into_iter()
            .map(|(key, def)| to_category(key, def.channels))
            .collect(),
    };

    Ok(Catalog { kind, categories })
}
