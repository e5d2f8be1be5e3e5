//! Shared fixtures for catalog integration tests

#![allow(dead_code)]

use extmarket_core::catalog::{CatalogDataset, CatalogIndex, ExtensionRecord};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A base dataset shaped like the shipped `extensions.json`
pub fn base_dataset_json() -> &'static str {
    r#"{
    "tabsInGroups": {
        "text-to-speech": [
            {
                "package_name": "extension_kokoro",
                "name": "Kokoro TTS",
                "requirements": "extension_kokoro @ git+https://github.com/example/extension_kokoro@main",
                "description": "Lightweight multilingual speech synthesis",
                "extension_type": "interface",
                "extension_class": "text-to-speech",
                "author": "hexgrad",
                "extension_author": "rsxdalv",
                "license": "Apache-2.0",
                "website": "https://github.com/hexgrad/kokoro",
                "extension_website": "https://github.com/example/extension_kokoro",
                "extension_platform_version": "0.0.1",
                "recommended": true
            },
            {
                "package_name": "extension_bark",
                "name": "Bark",
                "requirements": "extension_bark",
                "description": "Generative voice model with laughter and music",
                "extension_type": "interface",
                "extension_class": "text-to-speech",
                "author": "Suno",
                "extension_author": "rsxdalv",
                "license": "MIT",
                "website": "https://github.com/suno-ai/bark",
                "extension_website": "https://github.com/example/extension_bark",
                "extension_platform_version": "0.0.1"
            }
        ],
        "tools": [
            {
                "package_name": "a",
                "name": "Alpha Tool",
                "requirements": "a",
                "description": "does X",
                "extension_type": "interface",
                "extension_class": "util",
                "author": "Bob",
                "extension_author": "Bob",
                "license": "MIT",
                "website": "https://example.com/a",
                "extension_website": "https://example.com/a",
                "extension_platform_version": "0.0.1",
                "recommended": true
            }
        ],
        "outputs": [
            {
                "package_name": "extension_widget",
                "name": "Bob's Widget",
                "requirements": "extension_widget",
                "description": "Shows generated audio in a gallery",
                "extension_type": "interface",
                "extension_class": "outputs",
                "author": "Dana",
                "extension_author": "Dana",
                "license": "MIT",
                "website": "https://example.com/widget",
                "extension_website": "https://example.com/widget",
                "extension_platform_version": "0.0.1"
            }
        ]
    },
    "decorators": [
        {
            "package_name": "decorator_log",
            "name": "Generation Logger",
            "requirements": "decorator_log",
            "description": "Logs every generation",
            "extension_type": "decorator",
            "extension_class": "decorator",
            "author": "Eve",
            "extension_author": "Eve",
            "license": "MIT",
            "website": "https://example.com/log",
            "extension_website": "https://example.com/log",
            "extension_platform_version": "0.0.1",
            "recommended": true
        }
    ],
    "tabs_not_recomended": []
}"#
}

/// An external dataset adding one TTS engine and one decorator
pub fn external_dataset_json() -> &'static str {
    r#"{
    "tabsInGroups": {
        "text-to-speech": [
            {
                "package_name": "extension_piper",
                "name": "Piper",
                "description": "Fast local neural TTS",
                "extension_type": "interface",
                "extension_class": "text-to-speech",
                "author": "rhasspy",
                "recommended": true
            }
        ]
    },
    "decorators": [
        {
            "package_name": "decorator_tags",
            "name": "Tagger",
            "description": "Adds metadata tags to outputs",
            "extension_type": "decorator",
            "extension_class": "decorator",
            "author": "Frank"
        }
    ]
}"#
}

pub fn base_dataset() -> CatalogDataset {
    serde_json::from_str(base_dataset_json()).expect("base fixture parses")
}

pub fn external_dataset() -> CatalogDataset {
    serde_json::from_str(external_dataset_json()).expect("external fixture parses")
}

pub fn merged_index() -> Arc<CatalogIndex> {
    init_test_logging();
    Arc::new(CatalogIndex::from_datasets(base_dataset(), external_dataset()))
}

/// The single-record dataset used by the tools scenarios
pub fn single_tool_index() -> CatalogIndex {
    let dataset: CatalogDataset = serde_json::from_str(
        r#"{
        "tabsInGroups": {
            "tools": [
                {"package_name": "a", "name": "Alpha Tool", "description": "does X",
                 "extension_class": "util", "author": "Bob",
                 "extension_type": "interface", "recommended": true}
            ]
        },
        "decorators": []
    }"#,
    )
    .expect("single tool fixture parses");
    CatalogIndex::new(dataset)
}

pub fn package_names<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ExtensionRecord>,
{
    records
        .into_iter()
        .map(|record| record.package_name.clone())
        .collect()
}
