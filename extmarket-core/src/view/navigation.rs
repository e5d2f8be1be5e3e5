//! Navigation adapter
//!
//! Abstracts the address bar and session history so the controller never
//! touches an ambient global. A browser host implements [`Navigator`] over
//! `location.search` and `history.pushState`; tests and the CLI use
//! [`MemoryNavigator`].

use super::params::ParamMap;

/// Read and write the current URL's query parameters
pub trait Navigator {
    /// Parameters of the current history entry
    fn read(&self) -> ParamMap;

    /// Push a new history entry without reloading
    fn write(&mut self, params: &ParamMap);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn read(&self) -> ParamMap {
        (**self).read()
    }

    fn write(&mut self, params: &ParamMap) {
        (**self).write(params)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn read(&self) -> ParamMap {
        (**self).read()
    }

    fn write(&mut self, params: &ParamMap) {
        (**self).write(params)
    }
}

/// In-memory session history with back/forward
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    entries: Vec<ParamMap>,
    cursor: usize,
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNavigator {
    /// History with a single entry and no parameters
    pub fn new() -> Self {
        Self::with_initial(ParamMap::new())
    }

    pub fn with_initial(params: ParamMap) -> Self {
        Self {
            entries: vec![params],
            cursor: 0,
        }
    }

    /// Start from a query string or URL
    pub fn from_query(query: &str) -> Self {
        Self::with_initial(ParamMap::from_query(query))
    }

    /// Step back one entry; false at the start of history
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry; false at the end of history
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries in history
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_query(&self) -> String {
        self.entries[self.cursor].to_query()
    }

    pub fn entries(&self) -> &[ParamMap] {
        &self.entries
    }
}

impl Navigator for MemoryNavigator {
    fn read(&self) -> ParamMap {
        self.entries[self.cursor].clone()
    }

    fn write(&mut self, params: &ParamMap) {
        // Pushing discards any forward entries, like a browser does
        self.entries.truncate(self.cursor + 1);
        self.entries.push(params.clone());
        self.cursor = self.entries.len() - 1;
    }
}
