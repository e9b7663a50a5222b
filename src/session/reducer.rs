//! Reducer for the session machine.

use crate::model::View;
use crate::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{LookupOutcome, PhrasebookState, SessionState};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Navigate(view) => navigate(state, view),

            SessionIntent::SetQuery(query) => SessionState { query, ..state },

            SessionIntent::SetLanguage(language) => SessionState { language, ..state },

            SessionIntent::LookupStarted => SessionState {
                view: View::Search,
                lookup_in_flight: true,
                ..state
            },

            // Resolutions are applied in arrival order, so the last call to
            // finish owns the displayed result.
            SessionIntent::LookupResolved(result) => SessionState {
                lookup_in_flight: false,
                lookup: match result {
                    Some(entry) => LookupOutcome::Found(entry),
                    None => LookupOutcome::NotFound,
                },
                ..state
            },

            SessionIntent::WordOfTheDayLoaded(Some(entry)) => SessionState {
                word_of_the_day: Some(entry),
                ..state
            },
            SessionIntent::WordOfTheDayLoaded(None) => state,

            SessionIntent::CategorySelected(category) => SessionState {
                phrasebook: PhrasebookState {
                    active_category: Some(category),
                    phrases: Vec::new(),
                    loading: true,
                },
                ..state
            },

            SessionIntent::PhrasesLoaded { category, phrases } => {
                if state.phrasebook.active_category.as_deref() != Some(category.as_str()) {
                    tracing::debug!(category = %category, "Dropping phrases for inactive category");
                    return state;
                }
                SessionState {
                    phrasebook: PhrasebookState {
                        active_category: Some(category),
                        phrases,
                        loading: false,
                    },
                    ..state
                }
            }

            SessionIntent::BackToCategories => SessionState {
                phrasebook: PhrasebookState::default(),
                ..state
            },
        }
    }
}

fn navigate(mut state: SessionState, view: View) -> SessionState {
    state.view = view;
    if view != View::Search {
        state.lookup = LookupOutcome::None;
    }
    if view == View::Phrasebook {
        state.phrasebook = PhrasebookState::default();
    }
    state
}
