//! Reading dataset documents from disk

use std::path::Path;
use tracing::{debug, info};

use super::{CatalogDataset, CatalogIndex};
use crate::config::DatasetConfig;
use crate::error::{CatalogError, Result};

/// Serialization format of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Pick the format from the file extension; anything unrecognised is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DatasetFormat::Yaml,
            _ => DatasetFormat::Json,
        }
    }

    /// Parse a dataset document, attributing errors to `path`
    pub fn parse(&self, content: &str, path: &Path) -> Result<CatalogDataset> {
        match self {
            DatasetFormat::Json => {
                serde_json::from_str(content).map_err(|source| CatalogError::Json {
                    path: path.to_path_buf(),
                    source,
                })
            }
            DatasetFormat::Yaml => {
                serde_yaml_ng::from_str(content).map_err(|source| CatalogError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

/// Load one dataset file
pub fn load_dataset(path: &Path) -> Result<CatalogDataset> {
    if !path.exists() {
        return Err(CatalogError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = DatasetFormat::from_path(path).parse(&content, path)?;
    debug!(
        path = %path.display(),
        records = dataset.record_count(),
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Load, merge and index the configured datasets
///
/// A missing external file is tolerated when `external_optional` is set.
pub fn load_catalog(config: &DatasetConfig) -> Result<CatalogIndex> {
    let base = load_dataset(&config.base)?;

    let external = match &config.external {
        Some(path) if !path.exists() && config.external_optional => {
            debug!(path = %path.display(), "External dataset absent, using base only");
            CatalogDataset::new()
        }
        Some(path) => load_dataset(path)?,
        None => CatalogDataset::new(),
    };

    let index = CatalogIndex::from_datasets(base, external);
    info!(records = index.len(), "Catalog ready");
    Ok(index)
}
