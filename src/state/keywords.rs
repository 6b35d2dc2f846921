use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Keywords the user has toggled on, insertion-ordered for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSelection {
    inner: IndexSet<String>,
}

impl KeywordSelection {
    pub fn new() -> Self {
        KeywordSelection::default()
    }

    /// Flip membership for a keyword.
    pub fn toggle(&mut self, keyword: &str) {
        if !self.inner.shift_remove(keyword) {
            self.inner.insert(keyword.to_string());
        }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.inner.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
