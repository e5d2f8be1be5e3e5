//! Ordered URL query parameter map

use std::fmt;
use url::form_urlencoded;

pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";
pub const BROWSE_PARAM: &str = "browse";
pub const EXTENSION_PARAM: &str = "extension";
pub const VIEW_PARAM: &str = "view";

/// Query parameters in insertion order
///
/// Lookups return the first value for a name, matching how browsers
/// resolve repeated parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    pairs: Vec<(String, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string
    ///
    /// Accepts a bare query (`a=1&b=2`), one with a leading `?`, or a whole
    /// URL; anything after `#` is ignored. A `?` inside a bare query's
    /// values is kept as data.
    pub fn from_query(input: &str) -> Self {
        let without_fragment = input.split('#').next().unwrap_or_default();
        let query = match without_fragment.find('?') {
            Some(position) if is_location(&without_fragment[..position]) => {
                &without_fragment[position + 1..]
            }
            Some(_) => without_fragment,
            None if without_fragment.contains('=') || !without_fragment.contains('/') => {
                without_fragment
            }
            None => "",
        };

        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Serialize as `?a=1&b=2`, or an empty string when there are no parameters
    pub fn to_query(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        format!("?{encoded}")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set a parameter, replacing every existing value for the name
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(key, _)| key == name) {
            Some(position) => {
                self.pairs[position].1 = value;
                let mut index = 0;
                self.pairs.retain(|(key, _)| {
                    let keep = key != name || index == position;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.pairs.retain(|(key, _)| key != name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for ParamMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

/// Whether the text before the first `?` is a URL or path rather than
/// the start of a bare query
fn is_location(prefix: &str) -> bool {
    !prefix.contains('=') || prefix.contains("://")
}
