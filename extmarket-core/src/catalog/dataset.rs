//! Catalog dataset documents and the base/external merge

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::{CategoryGroup, ExtensionRecord};

/// One dataset document (`extensions.json` or `extensions.external.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDataset {
    /// Records per primary category tab
    #[serde(rename = "tabsInGroups", default)]
    pub groups: BTreeMap<CategoryGroup, Vec<ExtensionRecord>>,

    /// Decorator records, unioned into `all` but not a tab of their own
    #[serde(default)]
    pub decorators: Vec<ExtensionRecord>,

    /// Passed through untouched
    #[serde(
        rename = "tabs_not_recomended",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub not_recommended: Option<Vec<ExtensionRecord>>,

    /// Legacy flat tab map, passed through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Map<String, Value>>,

    /// Any other top-level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of one group, empty if the group is absent
    pub fn group(&self, group: CategoryGroup) -> &[ExtensionRecord] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total records across groups and decorators
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum::<usize>() + self.decorators.len()
    }

    /// Merge an external dataset on top of this one
    ///
    /// Group sequences and decorators are concatenated base-first with no
    /// de-duplication. `tabs` is merged key by key. Every other top-level
    /// key present in `external` replaces the base value.
    pub fn merge(mut self, external: CatalogDataset) -> Self {
        let base_count = self.record_count();
        let external_count = external.record_count();

        for (group, records) in external.groups {
            self.groups.entry(group).or_default().extend(records);
        }
        self.decorators.extend(external.decorators);

        if external.not_recommended.is_some() {
            self.not_recommended = external.not_recommended;
        }

        match (self.tabs.as_mut(), external.tabs) {
            (Some(base_tabs), Some(external_tabs)) => base_tabs.extend(external_tabs),
            (None, Some(external_tabs)) => self.tabs = Some(external_tabs),
            (_, None) => {}
        }

        self.extra.extend(external.extra);

        debug!(
            base = base_count,
            external = external_count,
            merged = self.record_count(),
            "Merged catalog datasets"
        );

        self
    }
}
