//! Device specification catalogs.
//!
//! The device spec ships two JSON documents:
//!
//! - `channels.json` - channel categories and the properties each defines
//! - `devices.json` - device categories and the channels each defines
//!
//! Both map a category key to a definition whose nested entries carry a
//! `required` flag. [`load_catalog`] reads either one into a [`Catalog`],
//! preserving document order.
//!
//! # Example
//!
//! ```
//! use viewspec::spec::{parse_catalog, CatalogKind};
//! use std::path::Path;
//!
//! let json = r#"{"battery": {"properties": {"level": {"required": true}}}}"#;
//! let catalog = parse_catalog(json, CatalogKind::Channels, Path::new("channels.json")).unwrap();
//!
//! let battery = catalog.get("battery").unwrap();
//! assert!(battery.entries[0].required);
//! ```

pub mod catalog;
pub mod ordered;

pub use catalog::{load_catalog, parse_catalog, Catalog, Category, SubEntity};
pub use ordered::OrderedMap;

/// Category key excluded from validation in both catalogs.
pub const GENERIC_CATEGORY: &str = "generic";

/// Which of the two spec catalogs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Channel categories; sub-entities are properties.
    Channels,
    /// Device categories; sub-entities are channels.
    Devices,
}

impl CatalogKind {
    /// File name of the catalog inside the spec directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            CatalogKind::Channels => "channels.json",
            CatalogKind::Devices => "devices.json",
        }
    }

    /// Singular name of a category in this catalog.
    pub fn category_noun(&self) -> &'static str {
        match self {
            CatalogKind::Channels => "channel",
            CatalogKind::Devices => "device",
        }
    }

    /// Singular name of a sub-entity in this catalog.
    pub fn entry_noun(&self) -> &'static str {
        match self {
            CatalogKind::Channels => "property",
            CatalogKind::Devices => "channel",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Channels => write!(f, "channels"),
            CatalogKind::Devices => write!(f, "devices"),
        }
    }
}
