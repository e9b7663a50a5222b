//! Favorited dictionary entries, unique by word.

use crate::model::DictionaryEntry;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    entries: Vec<DictionaryEntry>,
}

impl Favorites {
    /// Build from persisted entries. Later duplicates of a word are dropped.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let mut favorites = Self::default();
        for entry in entries {
            if !favorites.contains(&entry.word) {
                favorites.entries.push(entry);
            }
        }
        favorites
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Remove the entry with the same word if present, otherwise append
    /// a snapshot of `entry`.
    pub fn toggle(&mut self, entry: &DictionaryEntry) -> Toggle {
        if self.contains(&entry.word) {
            self.entries.retain(|e| !e.same_word(entry));
            Toggle::Removed
        } else {
            self.entries.push(entry.clone());
            Toggle::Added
        }
    }
}
