//! Resolved locations of the spec documents and view directories.

use std::path::{Path, PathBuf};

use super::loader::ProjectConfig;
use crate::spec::CatalogKind;
use crate::views::{DirectorySource, DEFAULT_VIEW_EXTENSION};

/// Default spec directory, relative to the project root.
pub const DEFAULT_SPEC_DIR: &str = "spec/devices";
/// Default channel view directory, relative to the project root.
pub const DEFAULT_CHANNEL_VIEWS: &str = "apps/panel/lib/modules/devices/views/channels";
/// Default device view directory, relative to the project root.
pub const DEFAULT_DEVICE_VIEWS: &str = "apps/panel/lib/modules/devices/views/devices";

/// Explicit overrides from the command line or environment.
///
/// These win over `.viewspec.yml` and are used as given.
#[derive(Debug, Clone, Default)]
pub struct LayoutOverrides {
    pub spec_dir: Option<PathBuf>,
    pub channel_views: Option<PathBuf>,
    pub device_views: Option<PathBuf>,
}

/// Where everything lives for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub project_root: PathBuf,
    pub spec_dir: PathBuf,
    pub channel_views: PathBuf,
    pub device_views: PathBuf,
    pub extension: String,
}

impl Layout {
    /// Default layout under `project_root`.
    pub fn with_defaults(project_root: &Path) -> Self {
        Self::resolve(
            project_root,
            &ProjectConfig::default(),
            &LayoutOverrides::default(),
        )
    }

    /// Merge defaults, project config and overrides.
    ///
    /// Merge order (later wins):
    /// 1. Built-in defaults
    /// 2. `.viewspec.yml` (relative paths resolved against the project root)
    /// 3. Command-line / environment overrides
    pub fn resolve(
        project_root: &Path,
        config: &ProjectConfig,
        overrides: &LayoutOverrides,
    ) -> Self {
        let pick = |explicit: &Option<PathBuf>, configured: &Option<PathBuf>, default: &str| {
            explicit.clone().unwrap_or_else(|| {
                let relative = configured.as_deref().unwrap_or(Path::new(default));
                project_root.join(relative)
            })
        };

        Self {
            project_root: project_root.to_path_buf(),
            spec_dir: pick(&overrides.spec_dir, &config.spec_dir, DEFAULT_SPEC_DIR),
            channel_views: pick(
                &overrides.channel_views,
                &config.channel_views,
                DEFAULT_CHANNEL_VIEWS,
            ),
            device_views: pick(
                &overrides.device_views,
                &config.device_views,
                DEFAULT_DEVICE_VIEWS,
            ),
            extension: config
                .extension
                .clone()
                .unwrap_or_else(|| DEFAULT_VIEW_EXTENSION.to_string()),
        }
    }

    /// Path of the given catalog document.
    pub fn catalog_path(&self, kind: CatalogKind) -> PathBuf {
        self.spec_dir.join(kind.file_name())
    }

    /// Directory holding the views checked against the given catalog.
    pub fn views_dir(&self, kind: CatalogKind) -> &Path {
        match kind {
            CatalogKind::Channels => &self.channel_views,
            CatalogKind::Devices => &self.device_views,
        }
    }

    /// View source for the given catalog.
    pub fn view_source(&self, kind: CatalogKind) -> DirectorySource {
        DirectorySource::with_extension(self.views_dir(kind), self.extension.clone())
    }
}
