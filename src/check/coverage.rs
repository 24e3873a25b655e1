//! Spec keys the view-type tables do not cover.
//!
//! The checker ignores these silently; listing them shows where the tables
//! lag behind the spec.

use crate::spec::{Catalog, GENERIC_CATEGORY};
use crate::views::view_name;

/// A spec entry with no view-type mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedKey {
    pub category: String,
    pub key: String,
}

/// Find entries of `catalog` whose key has no view-type mapping.
pub fn unmapped_keys(catalog: &Catalog) -> Vec<UnmappedKey> {
    catalog
        .iter()
        .filter(|c| c.key != GENERIC_CATEGORY)
        .flat_map(|c| {
            c.entries
                .iter()
                .filter(|e| view_name(catalog.kind, &e.key).is_none())
                .map(|e| UnmappedKey {
                    category: c.key.clone(),
                    key: e.key.clone(),
                })
        })
        .collect()
}
