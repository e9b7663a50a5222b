//! Intents for the session state machine.

use crate::model::{DictionaryEntry, Phrase, SourceLanguage, View};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// User picked a navigation target.
    Navigate(View),

    /// Search box contents changed.
    SetQuery(String),

    /// Lookup direction toggled.
    SetLanguage(SourceLanguage),

    /// A lookup was submitted and the gateway call issued.
    LookupStarted,

    /// A lookup call finished. `None` means nothing usable came back.
    LookupResolved(Option<DictionaryEntry>),

    /// The word-of-the-day call finished.
    WordOfTheDayLoaded(Option<DictionaryEntry>),

    /// User opened a phrasebook category.
    CategorySelected(String),

    /// Phrases for `category` arrived.
    PhrasesLoaded {
        category: String,
        phrases: Vec<Phrase>,
    },

    /// User returned to the category grid.
    BackToCategories,
}

impl Intent for SessionIntent {}
