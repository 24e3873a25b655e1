//! viewspec - Check generated device views against the device spec.
//!
//! The device spec marks every channel property and every device channel as
//! `required` or optional. Generated Dart views expose one typed accessor
//! per property or channel; a required one must use `.first` and an optional
//! one must use `.firstOrNull`. viewspec finds the accessors, joins them
//! against the spec and reports every disagreement.
//!
//! # Modules
//!
//! - [`check`] - Cross-checking catalogs against view accessors
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project root discovery and layout
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report aggregation and formatting
//! - [`spec`] - Loading the channel and device catalogs
//! - [`ui`] - Terminal output
//! - [`views`] - Accessor extraction and view-type tables
//!
//! # Example
//!
//! ```
//! use viewspec::views::{extract_accessors, Selection};
//! use viewspec::spec::CatalogKind;
//!
//! let source = "OnChannelPropertyView get on => properties.whereType<OnChannelPropertyView>().first;";
//! let accessors = extract_accessors(source, CatalogKind::Channels);
//! assert_eq!(accessors.get("OnChannelPropertyView").unwrap().selection, Selection::First);
//! ```
//!
//! For file-based runs, see the integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod spec;
pub mod ui;
pub mod views;

pub use error::{Result, ViewSpecError};
