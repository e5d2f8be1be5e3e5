//! Flattened catalog index
//!
//! Built once from the merged dataset. Holds the ordered "all" sequence
//! that free-text search runs over and answers per-category lookups.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::{CatalogDataset, Category, CategoryGroup, ExtensionRecord};

/// Read-only view over a merged dataset
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    dataset: CatalogDataset,

    /// Every group in enumeration order, then decorators
    all: Vec<ExtensionRecord>,

    /// First position of each package name in `all`
    positions: HashMap<String, usize>,
}

/// Number of records behind one category selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
}

impl CatalogIndex {
    /// Index a merged dataset
    pub fn new(dataset: CatalogDataset) -> Self {
        let mut all = Vec::with_capacity(dataset.record_count());
        for group in CategoryGroup::ALL {
            all.extend(dataset.group(group).iter().cloned());
        }
        all.extend(dataset.decorators.iter().cloned());

        let mut positions = HashMap::with_capacity(all.len());
        for (position, record) in all.iter().enumerate() {
            if positions.contains_key(&record.package_name) {
                warn!(
                    package_name = %record.package_name,
                    "Duplicate package name in catalog; lookups resolve to the first entry"
                );
                continue;
            }
            positions.insert(record.package_name.clone(), position);
        }

        debug!(
            records = all.len(),
            unique = positions.len(),
            decorators = dataset.decorators.len(),
            "Built catalog index"
        );

        Self {
            dataset,
            all,
            positions,
        }
    }

    /// Merge base and external datasets and index the result
    pub fn from_datasets(base: CatalogDataset, external: CatalogDataset) -> Self {
        Self::new(base.merge(external))
    }

    /// The merged dataset this index was built from
    pub fn dataset(&self) -> &CatalogDataset {
        &self.dataset
    }

    /// Every record, groups first in enumeration order, then decorators
    pub fn all(&self) -> &[ExtensionRecord] {
        &self.all
    }

    pub fn decorators(&self) -> &[ExtensionRecord] {
        &self.dataset.decorators
    }

    pub fn group(&self, group: CategoryGroup) -> &[ExtensionRecord] {
        self.dataset.group(group)
    }

    /// Records behind a category selector
    ///
    /// Unknown categories yield an empty slice.
    pub fn lookup(&self, category: &Category) -> &[ExtensionRecord] {
        match category {
            Category::All => self.all(),
            Category::Decorators => self.decorators(),
            Category::Group(group) => self.group(*group),
            Category::Unknown(_) => &[],
        }
    }

    /// Lookup by raw key, as read from a URL or command line
    pub fn lookup_key(&self, key: &str) -> &[ExtensionRecord] {
        self.lookup(&Category::parse(key))
    }

    /// Find a record by package name
    pub fn find(&self, package_name: &str) -> Option<&ExtensionRecord> {
        self.positions
            .get(package_name)
            .map(|&position| &self.all[position])
    }

    pub fn contains(&self, package_name: &str) -> bool {
        self.positions.contains_key(package_name)
    }

    /// The first `limit` recommended records, in index order
    pub fn featured(&self, limit: usize) -> Vec<&ExtensionRecord> {
        self.all
            .iter()
            .filter(|record| record.is_recommended())
            .take(limit)
            .collect()
    }

    /// Record counts for `all`, each group in order, and decorators
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let mut counts = Vec::with_capacity(CategoryGroup::ALL.len() + 2);
        counts.push(CategoryCount {
            category: Category::All,
            label: "All",
            count: self.all.len(),
        });
        for group in CategoryGroup::ALL {
            counts.push(CategoryCount {
                category: Category::Group(group),
                label: group.label(),
                count: self.group(group).len(),
            });
        }
        counts.push(CategoryCount {
            category: Category::Decorators,
            label: "Decorators",
            count: self.decorators().len(),
        });
        counts
    }

    /// Total number of records, duplicates included
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
