//! Free-text filtering over catalog records
//!
//! A query matches a record when its trimmed, lower-cased text is a
//! substring of the lower-cased name, description, class or author.
//! Filtering is stable and never re-sorts; an empty query keeps everything.

use crate::catalog::{CatalogIndex, Category, ExtensionRecord};

/// A normalized search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Normalize raw input text
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        Self { needle }
    }

    /// True when the query filters nothing out
    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    pub fn matches(&self, record: &ExtensionRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    /// Keep the matching records, in input order
    pub fn apply<'a>(&self, records: &'a [ExtensionRecord]) -> Vec<&'a ExtensionRecord> {
        if self.is_empty() {
            return records.iter().collect();
        }
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Filter a record sequence by free text
pub fn filter<'a>(records: &'a [ExtensionRecord], query: &str) -> Vec<&'a ExtensionRecord> {
    SearchQuery::new(query).apply(records)
}

/// Restrict to a category, then filter by free text
pub fn filter_category<'a>(
    index: &'a CatalogIndex,
    category: &Category,
    query: &str,
) -> Vec<&'a ExtensionRecord> {
    filter(index.lookup(category), query)
}

/// "N extension(s) found"
pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} extension{plural} found")
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<ExtensionRecord> {
        serde_json::from_str(
            r#"[
            {"package_name": "a", "name": "Alpha Tool", "description": "does X",
             "extension_class": "util", "author": "Bob", "extension_author": "Zed",
             "extension_type": "interface", "recommended": true},
            {"package_name": "b", "name": "Beta Voice", "description": "Clones VOICES",
             "extension_class": "text-to-speech", "author": "Carol",
             "extension_type": "interface"},
            {"package_name": "c", "name": "Gamma", "description": "Pitch shifting",
             "extension_class": "audio-conversion", "author": "alice",
             "extension_type": "decorator"}
        ]"#,
        )
        .unwrap()
    }

    fn ids(records: &[&ExtensionRecord]) -> Vec<String> {
        records.iter().map(|r| r.package_name.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = records();
        assert_eq!(ids(&filter(&records, "")), vec!["a", "b", "c"]);
        assert_eq!(ids(&filter(&records, "   \t")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_matches_each_field() {
        let records = records();
        assert_eq!(ids(&filter(&records, "alpha")), vec!["a"]); // name
        assert_eq!(ids(&filter(&records, "pitch")), vec!["c"]); // description
        assert_eq!(ids(&filter(&records, "text-to")), vec!["b"]); // class
        assert_eq!(ids(&filter(&records, "carol")), vec!["b"]); // author
    }

    #[test]
    fn test_extension_author_not_searched() {
        let records = records();
        assert!(filter(&records, "zed").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let records = records();
        assert_eq!(filter(&records, "VOICE"), filter(&records, "voice"));
        assert_eq!(ids(&filter(&records, "ALICE")), vec!["c"]);
    }

    #[test]
    fn test_query_trimmed() {
        let records = records();
        assert_eq!(ids(&filter(&records, "  gamma  ")), vec!["c"]);
    }

    #[test]
    fn test_order_preserved() {
        let records = records();
        // "a" hits every record through some field
        assert_eq!(ids(&filter(&records, "a")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_matches() {
        let records = records();
        assert!(filter(&records, "zzz").is_empty());
    }

    #[test]
    fn test_search_query_normalization() {
        let query = SearchQuery::new("  MiXeD ");
        assert_eq!(query.needle(), Some("mixed"));
        assert!(SearchQuery::new(" ").is_empty());
        assert!(SearchQuery::default().matches(&records()[0]));
    }

    #[test]
    fn test_result_summary() {
        assert_eq!(result_summary(0), "0 extensions found");
        assert_eq!(result_summary(1), "1 extension found");
        assert_eq!(result_summary(12), "12 extensions found");
    }
}
