//! Extension marketplace core library exports
//!
//! Loads the static extension catalog, answers category and text queries
//! over it, and keeps a shareable view state in sync with URL query
//! parameters.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod view;

pub use error::{CatalogError, Result};
