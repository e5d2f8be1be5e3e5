//! Extension records as they appear in the data files

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an extension hooks into the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    Interface,
    Decorator,
}

impl ExtensionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionType::Interface => "interface",
            ExtensionType::Decorator => "decorator",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry
///
/// `package_name` is the primary key used for lookup, deep links and list
/// keys. Every other field is display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    /// Unique package identifier
    pub package_name: String,

    /// Display name
    pub name: String,

    /// Installation requirements (usually a pip requirement string)
    #[serde(default)]
    pub requirements: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Interface or decorator
    pub extension_type: ExtensionType,

    /// Free-text class label (e.g. "text-to-speech", "tools")
    #[serde(default)]
    pub extension_class: String,

    /// Author of the wrapped project
    #[serde(default)]
    pub author: String,

    /// Author of the extension wrapper
    #[serde(default)]
    pub extension_author: String,

    #[serde(default)]
    pub license: String,

    /// Origin project URL
    #[serde(default)]
    pub website: String,

    /// Extension repository URL
    #[serde(default)]
    pub extension_website: String,

    /// Host platform version the extension targets
    #[serde(default)]
    pub extension_platform_version: String,

    /// Featured on the landing view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<bool>,
}

impl ExtensionRecord {
    /// Whether the record carries `recommended: true`
    pub fn is_recommended(&self) -> bool {
        self.recommended.unwrap_or(false)
    }

    /// Whether the origin project lives somewhere other than the extension repository
    pub fn has_distinct_origin(&self) -> bool {
        self.website != self.extension_website
    }

    /// First line of the description
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }

    /// The fields free-text search looks at
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            &self.name,
            &self.description,
            &self.extension_class,
            &self.author,
        ]
    }
}
