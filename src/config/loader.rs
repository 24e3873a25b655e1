//! Project config discovery and loading.
//!
//! A project may carry a `.viewspec.yml` at its root to move the spec and
//! view directories away from their default locations:
//!
//! ```yaml
//! spec_dir: spec/devices
//! channel_views: apps/panel/lib/modules/devices/views/channels
//! device_views: apps/panel/lib/modules/devices/views/devices
//! extension: dart
//! ```

use crate::error::{Result, ViewSpecError};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the optional project config.
pub const CONFIG_FILE: &str = ".viewspec.yml";

/// Settings read from `.viewspec.yml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding `channels.json` and `devices.json`.
    pub spec_dir: Option<PathBuf>,
    /// Directory of channel views.
    pub channel_views: Option<PathBuf>,
    /// Directory of device views.
    pub device_views: Option<PathBuf>,
    /// View file extension, without the dot.
    pub extension: Option<String>,
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.viewspec.yml` or a `spec/devices` directory (primary indicators)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file() || current.join("spec").join("devices").is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the project root for a run.
///
/// An explicit root is used as given. Otherwise the root is discovered from
/// the working directory, falling back to the working directory itself.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Cannot determine the working directory")?;
    Ok(find_project_root(&cwd).unwrap_or(cwd))
}

/// Load `.viewspec.yml` from the project root.
///
/// A missing file yields the default (empty) config.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config = parse_config(&content, &path)?;
    tracing::debug!("Loaded project config from {}", path.display());
    Ok(config)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ViewSpecError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
