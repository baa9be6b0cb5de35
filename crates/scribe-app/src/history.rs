//! Capped article history, newest first

use scribe_core::types::Article;
use uuid::Uuid;

/// Maximum number of articles kept in history. Inserting past the cap evicts
/// the oldest entry.
pub const HISTORY_CAP: usize = 50;

/// Ordered list of generated articles, newest first, length <= [`HISTORY_CAP`]
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Article>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a loaded entry list, clamping to the cap.
    ///
    /// Hand-edited history files may exceed the cap; excess oldest entries
    /// are dropped on load.
    pub fn from_entries(mut entries: Vec<Article>) -> Self {
        entries.truncate(HISTORY_CAP);
        Self { entries }
    }

    /// Insert a new article at the front, evicting the oldest past the cap
    pub fn insert(&mut self, article: Article) {
        self.entries.insert(0, article);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Remove the article with the given id. Returns true if one was removed.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|article| article.id != *id);
        self.entries.len() != before
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.entries.iter()
    }

    /// Entries as a slice, newest first (used by persistence and rendering)
    pub fn entries(&self) -> &[Article] {
        &self.entries
    }
}
