//! View-state controller

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

use super::codec::UrlCodec;
use super::navigation::Navigator;
use super::params::ParamMap;
use super::state::{Layout, Mode, ViewState};
use crate::catalog::{CatalogIndex, Category, ExtensionRecord};
use crate::config::{MarketplaceConfig, DEFAULT_FEATURED_LIMIT};
use crate::filter::{result_summary, SearchQuery};

/// What a presentation layer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot<'a> {
    pub mode: Mode,
    pub layout: Layout,
    pub search_text: &'a str,
    pub category: &'a Category,
    /// Category lookup narrowed by the search text
    pub visible: Vec<&'a ExtensionRecord>,
    /// Record shown in the detail view
    pub selected: Option<&'a ExtensionRecord>,
    /// Recommended records for the landing view
    pub featured: Vec<&'a ExtensionRecord>,
    pub summary: String,
}

/// Owns the view state and keeps it in step with the URL
///
/// Each user action builds the next state, and when it differs from the
/// current one, stores it and pushes the encoded parameters through the
/// navigator. Back/forward navigation is fed in via [`on_navigate`].
///
/// [`on_navigate`]: ViewController::on_navigate
pub struct ViewController<N: Navigator> {
    index: Arc<CatalogIndex>,
    navigator: N,
    codec: UrlCodec,
    featured_limit: usize,
    state: ViewState,
}

impl<N: Navigator> ViewController<N> {
    /// Create a controller with default settings, initialized from the current URL
    pub fn new(index: Arc<CatalogIndex>, navigator: N) -> Self {
        Self::with_settings(index, navigator, UrlCodec::default(), DEFAULT_FEATURED_LIMIT)
    }

    /// Create a controller using the search and featured settings from config
    pub fn with_config(index: Arc<CatalogIndex>, navigator: N, config: &MarketplaceConfig) -> Self {
        Self::with_settings(
            index,
            navigator,
            UrlCodec::new(config.search.activation_threshold),
            config.featured.limit,
        )
    }

    fn with_settings(
        index: Arc<CatalogIndex>,
        navigator: N,
        codec: UrlCodec,
        featured_limit: usize,
    ) -> Self {
        let state = codec.decode(&navigator.read(), &index);
        debug!(
            mode = %state.mode,
            category = %state.category,
            "View state initialized from URL"
        );
        Self {
            index,
            navigator,
            codec,
            featured_limit,
            state,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn codec(&self) -> &UrlCodec {
        &self.codec
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access for hosts that drive history directly (e.g. back/forward)
    ///
    /// Call [`on_navigate`](Self::on_navigate) after moving through history.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Parameters that describe the current state
    pub fn current_params(&self) -> ParamMap {
        self.codec.encode(&self.state)
    }

    /// The search box gained focus
    pub fn focus_search(&mut self) {
        let next = ViewState {
            mode: Mode::Browse,
            ..self.state.clone()
        };
        self.commit(next, "focus_search");
    }

    /// The search box was clicked
    pub fn click_search(&mut self) {
        let next = ViewState {
            mode: Mode::Browse,
            ..self.state.clone()
        };
        self.commit(next, "click_search");
    }

    /// The search text changed
    ///
    /// From the landing view, text reaching the activation threshold
    /// switches to browsing. In browse mode the text only narrows results.
    pub fn input_search(&mut self, text: &str) {
        let mut next = self.state.clone();
        next.search_text = text.to_string();
        if next.mode == Mode::Landing && self.codec.search_activates(text) {
            next.mode = Mode::Browse;
        }
        self.commit(next, "input_search");
    }

    /// A category tab was clicked
    pub fn select_category(&mut self, category: Category) {
        let next = ViewState {
            mode: Mode::Browse,
            category: category.normalized(),
            ..self.state.clone()
        };
        self.commit(next, "select_category");
    }

    /// Open the detail view for a package
    ///
    /// Returns false, leaving state untouched, when the package is unknown.
    pub fn open_extension(&mut self, package_name: &str) -> bool {
        if !self.index.contains(package_name) {
            debug!(package_name, "Cannot open unknown extension");
            return false;
        }
        let next = ViewState {
            selected_extension: Some(package_name.to_string()),
            ..self.state.clone()
        };
        self.commit(next, "open_extension");
        true
    }

    pub fn close_extension(&mut self) {
        let next = ViewState {
            selected_extension: None,
            ..self.state.clone()
        };
        self.commit(next, "close_extension");
    }

    pub fn set_layout(&mut self, layout: Layout) {
        let next = ViewState {
            layout,
            ..self.state.clone()
        };
        self.commit(next, "set_layout");
    }

    /// Back to the landing view, clearing search text and category
    pub fn return_to_landing(&mut self) {
        let next = ViewState {
            mode: Mode::Landing,
            search_text: String::new(),
            category: Category::All,
            ..self.state.clone()
        };
        self.commit(next, "return_to_landing");
    }

    /// Re-read state after the host moved through history
    ///
    /// Never writes to the navigator.
    pub fn on_navigate(&mut self) {
        self.state = self.codec.decode(&self.navigator.read(), &self.index);
        debug!(
            mode = %self.state.mode,
            category = %self.state.category,
            "View state restored from navigation"
        );
    }

    /// Read-only frame for the presentation layer
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        let query = SearchQuery::new(&self.state.search_text);
        let visible = query.apply(self.index.lookup(&self.state.category));
        let summary = result_summary(visible.len());

        ViewSnapshot {
            mode: self.state.mode,
            layout: self.state.layout,
            search_text: &self.state.search_text,
            category: &self.state.category,
            selected: self
                .state
                .selected_extension
                .as_deref()
                .and_then(|package_name| self.index.find(package_name)),
            featured: self.index.featured(self.featured_limit),
            visible,
            summary,
        }
    }

    fn commit(&mut self, next: ViewState, action: &'static str) -> bool {
        if next == self.state {
            trace!(action, "View state unchanged");
            return false;
        }

        if next.mode != self.state.mode {
            debug!(action, from = %self.state.mode, to = %next.mode, "Mode transition");
        }

        self.state = next;
        let params = self.codec.encode(&self.state);
        trace!(action, url = %params, "Pushing history entry");
        self.navigator.write(&params);
        true
    }
}
