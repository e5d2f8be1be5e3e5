//! ViewState <-> query parameter encoding
//!
//! | param       | written when                                       |
//! |-------------|----------------------------------------------------|
//! | `search`    | search text is non-empty                           |
//! | `category`  | category is not `all`                              |
//! | `browse`    | `true` when browsing with blank search text,       |
//! |             | `false` on the landing view with non-blank text    |
//! | `extension` | a detail view is open                              |
//! | `view`      | layout is `list`                                   |
//!
//! Non-blank search text decodes to browse mode unless `browse=false` says
//! otherwise. Decoding is lenient: missing or malformed values fall back to
//! defaults and an `extension` that names no known package is dropped.

use tracing::trace;

use super::params::{
    ParamMap, BROWSE_PARAM, CATEGORY_PARAM, EXTENSION_PARAM, SEARCH_PARAM, VIEW_PARAM,
};
use super::state::{Layout, Mode, ViewState};
use crate::catalog::{CatalogIndex, Category};
use crate::config::DEFAULT_ACTIVATION_THRESHOLD;

/// Converts view state to and from URL parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlCodec {
    activation_threshold: usize,
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_THRESHOLD)
    }
}

impl UrlCodec {
    pub fn new(activation_threshold: usize) -> Self {
        Self {
            activation_threshold,
        }
    }

    pub fn activation_threshold(&self) -> usize {
        self.activation_threshold
    }

    /// Whether typed text is long enough to leave the landing view
    pub fn search_activates(&self, text: &str) -> bool {
        let length = text.trim().chars().count();
        length > 0 && length >= self.activation_threshold
    }

    pub fn encode(&self, state: &ViewState) -> ParamMap {
        let mut params = ParamMap::new();

        if !state.search_text.is_empty() {
            params.set(SEARCH_PARAM, state.search_text.as_str());
        }
        if !state.category.is_default() {
            params.set(CATEGORY_PARAM, state.category.key());
        }
        match (state.mode, has_search_term(&state.search_text)) {
            (Mode::Browse, false) => params.set(BROWSE_PARAM, "true"),
            (Mode::Landing, true) => params.set(BROWSE_PARAM, "false"),
            _ => {}
        }
        if let Some(package_name) = &state.selected_extension {
            params.set(EXTENSION_PARAM, package_name.as_str());
        }
        if state.layout != Layout::default() {
            params.set(VIEW_PARAM, state.layout.as_str());
        }

        params
    }

    pub fn decode(&self, params: &ParamMap, index: &CatalogIndex) -> ViewState {
        let search_text = params.get(SEARCH_PARAM).unwrap_or_default().to_string();

        let category = params
            .get(CATEGORY_PARAM)
            .map(Category::parse)
            .unwrap_or_default();

        let mode = match params.get(BROWSE_PARAM).and_then(parse_flag) {
            Some(true) => Mode::Browse,
            Some(false) => Mode::Landing,
            None if has_search_term(&search_text) => Mode::Browse,
            None => Mode::Landing,
        };

        let selected_extension = params.get(EXTENSION_PARAM).and_then(|package_name| {
            if index.contains(package_name) {
                Some(package_name.to_string())
            } else {
                trace!(package_name, "Ignoring unknown extension in URL");
                None
            }
        });

        let layout = params
            .get(VIEW_PARAM)
            .and_then(Layout::parse)
            .unwrap_or_default();

        ViewState {
            mode,
            search_text,
            category,
            selected_extension,
            layout,
        }
    }
}

fn has_search_term(text: &str) -> bool {
    !text.trim().is_empty()
}

fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod codec_tests {
    use super::*;
    use crate::catalog::{CatalogDataset, CategoryGroup};
    use pretty_assertions::assert_eq;

    fn index() -> CatalogIndex {
        let dataset: CatalogDataset = serde_json::from_str(
            r#"{"tabsInGroups": {"tools": [
                {"package_name": "a", "name": "Alpha Tool", "extension_type": "interface"}
            ]}}"#,
        )
        .unwrap();
        CatalogIndex::new(dataset)
    }

    fn decode(query: &str) -> ViewState {
        UrlCodec::default().decode(&ParamMap::from_query(query), &index())
    }

    #[test]
    fn test_empty_url_is_landing_default() {
        assert_eq!(decode(""), ViewState::default());
        assert_eq!(UrlCodec::default().encode(&ViewState::default()), ParamMap::new());
    }

    #[test]
    fn test_activation_threshold() {
        let codec = UrlCodec::new(2);
        assert!(!codec.search_activates(""));
        assert!(!codec.search_activates("a"));
        assert!(!codec.search_activates(" a  "));
        assert!(codec.search_activates("ab"));

        let eager = UrlCodec::new(0);
        assert!(eager.search_activates("a"));
        assert!(!eager.search_activates("   "));
    }

    #[test]
    fn test_threshold_counts_characters() {
        // Two characters, six bytes
        assert!(UrlCodec::new(2).search_activates("語音"));
        assert!(!UrlCodec::new(3).search_activates("語音"));
    }

    #[test]
    fn test_decode_full() {
        let state = decode("?search=voice&category=tools&extension=a&view=list");
        assert_eq!(
            state,
            ViewState {
                mode: Mode::Browse,
                search_text: "voice".to_string(),
                category: Category::Group(CategoryGroup::Tools),
                selected_extension: Some("a".to_string()),
                layout: Layout::List,
            }
        );
    }

    #[test]
    fn test_browse_flag() {
        assert_eq!(decode("?browse=true").mode, Mode::Browse);
        assert_eq!(decode("?browse=1").mode, Mode::Browse);
        assert_eq!(decode("?browse=TRUE").mode, Mode::Browse);
        assert_eq!(decode("?browse=false").mode, Mode::Landing);
        assert_eq!(decode("?browse=maybe").mode, Mode::Landing);
    }

    #[test]
    fn test_any_search_term_opens_browse() {
        let state = decode("?search=a");
        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.search_text, "a");

        // Threshold only gates typing, not links
        let strict = UrlCodec::new(5).decode(&ParamMap::from_query("?search=a"), &index());
        assert_eq!(strict.mode, Mode::Browse);

        assert_eq!(decode("?search=%20%20").mode, Mode::Landing);
    }

    #[test]
    fn test_browse_false_keeps_landing_with_text() {
        let state = decode("?search=a&browse=false");
        assert_eq!(state.mode, Mode::Landing);
        assert_eq!(state.search_text, "a");
        assert_eq!(decode("?search=voice&browse=0").mode, Mode::Landing);
        assert_eq!(decode("?search=voice&browse=maybe").mode, Mode::Browse);
    }

    #[test]
    fn test_unknown_extension_dropped() {
        assert_eq!(decode("?extension=a").selected_extension.as_deref(), Some("a"));
        assert_eq!(decode("?extension=zzz").selected_extension, None);
        assert_eq!(decode("?extension=").selected_extension, None);
    }

    #[test]
    fn test_malformed_values_default() {
        let state = decode("?view=table&category=");
        assert_eq!(state.layout, Layout::Grid);
        assert_eq!(state.category, Category::All);
    }

    #[test]
    fn test_unknown_category_kept() {
        let state = decode("?category=games");
        assert_eq!(state.category, Category::Unknown("games".to_string()));
        assert_eq!(
            UrlCodec::default().encode(&state).get(CATEGORY_PARAM),
            Some("games")
        );
    }

    #[test]
    fn test_encode_browse_only_when_needed() {
        let codec = UrlCodec::default();

        let browsing_empty = ViewState {
            mode: Mode::Browse,
            ..ViewState::default()
        };
        assert_eq!(codec.encode(&browsing_empty).to_query(), "?browse=true");

        let browsing_with_text = ViewState {
            mode: Mode::Browse,
            search_text: "voice".to_string(),
            ..ViewState::default()
        };
        assert_eq!(codec.encode(&browsing_with_text).to_query(), "?search=voice");

        let browsing_short_text = ViewState {
            mode: Mode::Browse,
            search_text: "v".to_string(),
            ..ViewState::default()
        };
        assert_eq!(codec.encode(&browsing_short_text).to_query(), "?search=v");

        let landing_with_text = ViewState {
            search_text: "v".to_string(),
            ..ViewState::default()
        };
        assert_eq!(codec.encode(&landing_with_text).to_query(), "?search=v&browse=false");

        let browsing_blank_text = ViewState {
            mode: Mode::Browse,
            search_text: "   ".to_string(),
            ..ViewState::default()
        };
        assert_eq!(codec.encode(&browsing_blank_text).to_query(), "?search=+++&browse=true");
    }

    #[test]
    fn test_round_trip() {
        let codec = UrlCodec::default();
        let index = index();
        let states = [
            ViewState::default(),
            ViewState {
                search_text: "a".to_string(),
                ..ViewState::default()
            },
            ViewState {
                mode: Mode::Browse,
                search_text: "  spaced  ".to_string(),
                category: Category::Decorators,
                selected_extension: None,
                layout: Layout::List,
            },
            ViewState {
                mode: Mode::Browse,
                search_text: String::new(),
                category: Category::Unknown("games".to_string()),
                selected_extension: Some("a".to_string()),
                layout: Layout::Grid,
            },
            ViewState {
                mode: Mode::Landing,
                selected_extension: Some("a".to_string()),
                ..ViewState::default()
            },
            ViewState {
                search_text: "   ".to_string(),
                ..ViewState::default()
            },
            ViewState {
                mode: Mode::Browse,
                search_text: "v".to_string(),
                ..ViewState::default()
            },
        ];

        for state in states {
            let query = codec.encode(&state).to_query();
            let decoded = codec.decode(&ParamMap::from_query(&query), &index);
            assert_eq!(decoded, state, "round trip through {query}");
        }
    }
}
