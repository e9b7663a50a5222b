//! State for the session machine.

use crate::model::{DictionaryEntry, Phrase, SourceLanguage, View};
use crate::mvi::UiState;

/// What the most recent lookup produced, as seen by the search view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupOutcome {
    /// No lookup has resolved since the search view was last cleared.
    #[default]
    None,
    Found(DictionaryEntry),
    /// The lookup resolved without a usable entry.
    NotFound,
}

/// Render-ready status of the search view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchStatus<'a> {
    Idle,
    Loading,
    Found(&'a DictionaryEntry),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhrasebookState {
    /// `None` shows the category grid.
    pub active_category: Option<String>,
    pub phrases: Vec<Phrase>,
    pub loading: bool,
}

impl PhrasebookState {
    pub fn is_browsing_categories(&self) -> bool {
        self.active_category.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub view: View,
    pub query: String,
    pub language: SourceLanguage,
    pub lookup_in_flight: bool,
    pub lookup: LookupOutcome,
    /// `None` until the daily entry has loaded.
    pub word_of_the_day: Option<DictionaryEntry>,
    pub phrasebook: PhrasebookState,
}

impl UiState for SessionState {}

impl SessionState {
    /// Status shown by the search view. A pending call wins over any
    /// earlier outcome.
    pub fn search_status(&self) -> SearchStatus<'_> {
        if self.lookup_in_flight {
            return SearchStatus::Loading;
        }
        match &self.lookup {
            LookupOutcome::None => SearchStatus::Idle,
            LookupOutcome::Found(entry) => SearchStatus::Found(entry),
            LookupOutcome::NotFound => SearchStatus::NotFound,
        }
    }

    pub fn search_result(&self) -> Option<&DictionaryEntry> {
        match &self.lookup {
            LookupOutcome::Found(entry) => Some(entry),
            _ => None,
        }
    }

    /// The search bar is hidden while a quiz is on screen.
    pub fn shows_search_bar(&self) -> bool {
        self.view != View::Quiz
    }
}
