//! Extension catalog - dataset model, merge and index
//!
//! This module owns the read-only side of the marketplace: the records
//! describing each extension, the two data files they come from, and the
//! flattened index every query runs against.
//!
//! # Architecture
//!
//! ```text
//! extensions.json ──────────┐
//!                           ├── CatalogDataset::merge ──► CatalogIndex
//! extensions.external.json ─┘          (once)                │
//!                                                            ├── all()     flat, ordered
//!                                                            ├── lookup()  per category
//!                                                            └── find()    by package name
//! ```

mod category;
mod dataset;
mod index;
mod loader;
mod record;

pub use category::{Category, CategoryGroup};
pub use dataset::CatalogDataset;
pub use index::{CatalogIndex, CategoryCount};
pub use loader::{load_catalog, load_dataset, DatasetFormat};
pub use record::{ExtensionRecord, ExtensionType};

#[cfg(test)]
mod tests;
