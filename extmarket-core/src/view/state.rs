use serde::Serialize;
use std::fmt;

use crate::catalog::Category;

/// Which top-level view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Centered search box and featured extensions
    #[default]
    Landing,
    /// Search controls and result listing
    Browse,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Landing => "landing",
            Mode::Browse => "browse",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How results are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::List => "list",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "grid" => Some(Layout::Grid),
            "list" => Some(Layout::List),
            _ => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user currently sees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub mode: Mode,

    /// Raw search input, untrimmed
    pub search_text: String,

    pub category: Category,

    /// Package name of the open detail view
    pub selected_extension: Option<String>,

    pub layout: Layout,
}

impl ViewState {
    pub fn is_browsing(&self) -> bool {
        self.mode == Mode::Browse
    }

    pub fn has_selection(&self) -> bool {
        self.selected_extension.is_some()
    }
}
