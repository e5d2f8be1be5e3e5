//! Integration tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{Category, CategoryGroup, CatalogDataset, CatalogIndex};
    use pretty_assertions::assert_eq;

    fn dataset(json: &str) -> CatalogDataset {
        serde_json::from_str(json).unwrap()
    }

    /// Base and external data land in one index, base records first
    #[test]
    fn test_index_over_merged_datasets() {
        let base = dataset(
            r#"{
            "tabsInGroups": {
                "text-to-speech": [
                    {"package_name": "tts_base", "name": "Base TTS", "extension_type": "interface"}
                ],
                "tools": [
                    {"package_name": "tool_base", "name": "Base Tool", "extension_type": "interface"}
                ]
            },
            "decorators": [
                {"package_name": "deco_base", "name": "Base Decorator", "extension_type": "decorator"}
            ]
        }"#,
        );
        let external = dataset(
            r#"{
            "tabsInGroups": {
                "text-to-speech": [
                    {"package_name": "tts_ext", "name": "External TTS", "extension_type": "interface"}
                ]
            },
            "decorators": [
                {"package_name": "deco_ext", "name": "External Decorator", "extension_type": "decorator"}
            ]
        }"#,
        );

        let index = CatalogIndex::from_datasets(base, external);

        let all: Vec<_> = index.all().iter().map(|r| r.package_name.as_str()).collect();
        assert_eq!(
            all,
            vec!["tts_base", "tts_ext", "tool_base", "deco_base", "deco_ext"]
        );

        let tts: Vec<_> = index
            .lookup(&Category::Group(CategoryGroup::TextToSpeech))
            .iter()
            .map(|r| r.package_name.as_str())
            .collect();
        assert_eq!(tts, vec!["tts_base", "tts_ext"]);

        // Decorators are reachable through `all` and their own selector, not a group
        assert_eq!(index.lookup(&Category::Decorators).len(), 2);
        assert!(CategoryGroup::ALL
            .iter()
            .all(|g| index.group(*g).iter().all(|r| !r.package_name.starts_with("deco"))));
    }

    /// The dataset survives a serialize/parse cycle with pass-through keys intact
    #[test]
    fn test_pass_through_keys_preserved() {
        let original = dataset(
            r#"{
            "tabsInGroups": {},
            "decorators": [],
            "tabs_not_recomended": [
                {"package_name": "old", "name": "Old", "extension_type": "interface"}
            ],
            "generated": "2025-01-01"
        }"#,
        );

        let json = serde_json::to_string(&original).unwrap();
        let reparsed = dataset(&json);
        assert_eq!(reparsed, original);
        assert_eq!(reparsed.not_recommended.as_ref().map(Vec::len), Some(1));

        // Pass-through records never reach the index
        assert!(CatalogIndex::new(reparsed).is_empty());
    }
}
