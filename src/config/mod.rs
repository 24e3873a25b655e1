//! Project layout configuration.
//!
//! This module decides where the spec documents and generated views live:
//! - Project root discovery and `.viewspec.yml` loading in [`loader`]
//! - Merging defaults, config file and overrides in [`layout`]
//!
//! # Example
//!
//! ```
//! use viewspec::config::{load_project_config, Layout, LayoutOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".viewspec.yml"), "spec_dir: docs/spec").unwrap();
//!
//! let config = load_project_config(temp.path()).unwrap();
//! let layout = Layout::resolve(temp.path(), &config, &LayoutOverrides::default());
//! assert_eq!(layout.spec_dir, temp.path().join("docs/spec"));
//! ```

pub mod layout;
pub mod loader;

pub use layout::{
    Layout, LayoutOverrides, DEFAULT_CHANNEL_VIEWS, DEFAULT_DEVICE_VIEWS, DEFAULT_SPEC_DIR,
};
pub use loader::{
    find_project_root, load_project_config, parse_config, resolve_project_root, ProjectConfig,
    CONFIG_FILE,
};
