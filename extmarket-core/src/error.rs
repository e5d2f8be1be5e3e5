//! Error types for loading catalog data and configuration
//!
//! The browsing core itself never fails: unknown categories, stale
//! extension ids and malformed query parameters all degrade to defaults.
//! Only startup I/O can produce a [`CatalogError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading dataset or configuration files
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required dataset file does not exist
    #[error("Dataset file not found: {path}\n\nPass --base/--external or set `datasets` in extmarket.yaml.")]
    DatasetNotFound { path: PathBuf },

    /// Failed to read a file from disk
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the dataset shape
    #[error("Failed to parse JSON from {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A YAML document did not match the expected shape
    #[error("Failed to parse YAML from {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
