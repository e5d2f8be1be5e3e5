//! Category keys and the selector stored in view state

use serde::{Deserialize, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The closed set of primary category tabs
///
/// Declaration order is the canonical enumeration order; the derived `Ord`
/// relies on it so a `BTreeMap<CategoryGroup, _>` iterates tabs in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryGroup {
    Settings,
    TextToSpeech,
    AudioMusicGeneration,
    AudioConversion,
    Outputs,
    Tools,
    ConversationalAi,
    Tutorials,
}

impl CategoryGroup {
    /// Every group, in enumeration order
    pub const ALL: [CategoryGroup; 8] = [
        CategoryGroup::Settings,
        CategoryGroup::TextToSpeech,
        CategoryGroup::AudioMusicGeneration,
        CategoryGroup::AudioConversion,
        CategoryGroup::Outputs,
        CategoryGroup::Tools,
        CategoryGroup::ConversationalAi,
        CategoryGroup::Tutorials,
    ];

    /// Key used in data files and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryGroup::Settings => "settings",
            CategoryGroup::TextToSpeech => "text-to-speech",
            CategoryGroup::AudioMusicGeneration => "audio-music-generation",
            CategoryGroup::AudioConversion => "audio-conversion",
            CategoryGroup::Outputs => "outputs",
            CategoryGroup::Tools => "tools",
            CategoryGroup::ConversationalAi => "conversational-ai",
            CategoryGroup::Tutorials => "tutorials",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryGroup::Settings => "Settings",
            CategoryGroup::TextToSpeech => "Text-to-Speech",
            CategoryGroup::AudioMusicGeneration => "Audio & Music Generation",
            CategoryGroup::AudioConversion => "Audio Conversion",
            CategoryGroup::Outputs => "Outputs",
            CategoryGroup::Tools => "Tools",
            CategoryGroup::ConversationalAi => "Conversational AI",
            CategoryGroup::Tutorials => "Tutorials",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == key)
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category selection
///
/// Parsing never fails. Keys outside the enumeration are kept verbatim as
/// `Unknown` so they survive a trip through the URL; looking one up yields
/// no records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Union of every group plus decorators
    #[default]
    All,
    /// The decorator list
    Decorators,
    Group(CategoryGroup),
    Unknown(String),
}

impl Category {
    pub const ALL_KEY: &'static str = "all";
    pub const DECORATORS_KEY: &'static str = "decorators";

    /// Parse a category key. An empty key means the default (`all`).
    pub fn parse(key: &str) -> Self {
        match key {
            "" | Self::ALL_KEY => Category::All,
            Self::DECORATORS_KEY => Category::Decorators,
            other => match CategoryGroup::from_key(other) {
                Some(group) => Category::Group(group),
                None => Category::Unknown(other.to_string()),
            },
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Category::All => Self::ALL_KEY,
            Category::Decorators => Self::DECORATORS_KEY,
            Category::Group(group) => group.as_str(),
            Category::Unknown(key) => key,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Re-parse the key so hand-built values like `Unknown("tools")` compare
    /// equal to what the URL parser produces
    pub fn normalized(self) -> Self {
        match self {
            Category::Unknown(key) => Category::parse(&key),
            known => known,
        }
    }
}

impl From<CategoryGroup> for Category {
    fn from(group: CategoryGroup) -> Self {
        Category::Group(group)
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::parse(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
