//! Marketplace configuration
//!
//! Read from `extmarket.yaml`. Resolution order for the file:
//! 1. Explicit path (CLI `--config`)
//! 2. Platform config directory (`directories`), e.g. `~/.config/extmarket/extmarket.yaml`
//! 3. Built-in defaults when no file exists

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{CatalogError, Result};

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "extmarket.yaml";

/// Default minimum query length that switches the landing view to browsing
pub const DEFAULT_ACTIVATION_THRESHOLD: usize = 2;

/// Default number of featured records on the landing view
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    pub datasets: DatasetConfig,
    pub search: SearchConfig,
    pub featured: FeaturedConfig,
}

/// Where the two dataset documents live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub base: PathBuf,
    pub external: Option<PathBuf>,
    /// Treat a missing external file as an empty dataset
    pub external_optional: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("extensions.json"),
            external: Some(PathBuf::from("extensions.external.json")),
            external_optional: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trimmed character count at which typed text leaves the landing view.
    /// 0 and 1 both mean any non-empty text.
    pub activation_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedConfig {
    pub limit: usize,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

impl MarketplaceConfig {
    /// Load from the platform config directory, or defaults
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file; a missing file yields defaults
    ///
    /// Relative dataset paths are resolved against the file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&content).map_err(|source| CatalogError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(root) = path.parent() {
            config.datasets.resolve_relative_to(root);
        }

        debug!(path = %path.display(), "Loaded marketplace config");
        trace!(config = ?config, "Effective config");
        Ok(config)
    }

    /// Parse configuration YAML
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }

    /// `<platform config dir>/extmarket.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "extmarket", "extmarket")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("extmarket")))
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

impl DatasetConfig {
    fn resolve_relative_to(&mut self, root: &Path) {
        if self.base.is_relative() {
            self.base = root.join(&self.base);
        }
        if let Some(external) = self.external.as_mut() {
            if external.is_relative() {
                *external = root.join(&*external);
            }
        }
    }
}
