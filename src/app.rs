//! Application controller.
//!
//! `Lexicon` owns the gateway, the store and every piece of in-memory
//! state. Gateway work is split in two: a `begin_*` method dispatches the
//! "started" intent and returns a [`Pending`] future that holds no borrow
//! of the controller, and [`Lexicon::apply`] feeds the resolved
//! [`Outcome`] back through the reducers. Other interactions keep running
//! while a call is in flight, and several calls may overlap.
//!
//! The `async` methods (`submit_lookup`, `select_category`, ...) chain the
//! two steps for callers that do not need to interleave.

use std::sync::Arc;

use futures_core::future::BoxFuture;
use thiserror::Error;
use uuid::Uuid;

use crate::audio::PcmClip;
use crate::config::{Config, ConfigError};
use crate::content::{Assessment, APP_NAME};
use crate::favorites::{Favorites, Toggle};
use crate::gateway::{ContentGateway, GatewayError, GeminiGateway};
use crate::model::{
    DictionaryEntry, Phrase, QuizQuestion, RecordedAt, SourceLanguage, TestResult, View,
};
use crate::mvi::Reducer;
use crate::quiz::{QuizIntent, QuizReducer, QuizState, TestHistory, DEFAULT_TEST_TYPE, QUIZ_LENGTH};
use crate::session::{SessionIntent, SessionReducer, SessionState};
use crate::store::{FileBackend, PersistenceStore, StoreBackend, StoreError};

/// Errors that can occur while assembling a `Lexicon` from config.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Figures shown on the tests view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestsOverview {
    /// Mean score as a rounded percentage.
    pub average_score: u32,
    pub completed: usize,
}

/// A resolved gateway call, waiting to be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Lookup(Option<DictionaryEntry>),
    WordOfTheDay(Option<DictionaryEntry>),
    Phrases {
        category: String,
        phrases: Vec<Phrase>,
    },
    Questions {
        test_type: String,
        questions: Vec<QuizQuestion>,
    },
}

/// An in-flight gateway call. Owns everything it needs, so it can be
/// awaited or spawned while the controller keeps handling input.
pub type Pending = BoxFuture<'static, Outcome>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct Lexicon<G, B> {
    gateway: Arc<G>,
    store: PersistenceStore<B>,
    session: SessionState,
    quiz: QuizState,
    favorites: Favorites,
    history: TestHistory,
}

impl Lexicon<GeminiGateway, FileBackend> {
    /// Production wiring: Gemini gateway plus file store under the
    /// configured data directory.
    pub fn from_config(config: Config) -> Result<Self, StartupError> {
        config.validate()?;
        let backend = FileBackend::open(config.data_dir())?;
        let gateway = GeminiGateway::new(config.gateway)?;
        Ok(Self::new(gateway, PersistenceStore::new(backend)))
    }
}

impl<G: ContentGateway + 'static, B: StoreBackend> Lexicon<G, B> {
    /// Restore favorites and history from `store`. Session state starts
    /// fresh on every load.
    pub fn new(gateway: G, store: PersistenceStore<B>) -> Self {
        let favorites = Favorites::from_entries(store.load_favorites());
        let history = TestHistory::from_entries(store.load_history());
        tracing::info!(
            app = APP_NAME,
            favorites = favorites.len(),
            history = history.len(),
            "Restored persisted state"
        );
        Self {
            gateway: Arc::new(gateway),
            store,
            session: SessionState::default(),
            quiz: QuizState::default(),
            favorites,
            history,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn history(&self) -> &TestHistory {
        &self.history
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &PersistenceStore<B> {
        &self.store
    }

    pub fn view(&self) -> View {
        self.session.view
    }

    /// Feed a resolved call back into state. Outcomes may arrive in any
    /// order; the reducers decide which ones still matter.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Lookup(result) => {
                tracing::debug!(found = result.is_some(), "Lookup resolved");
                dispatch_mvi!(self, session, SessionReducer, SessionIntent::LookupResolved(result));
            }
            Outcome::WordOfTheDay(entry) => {
                dispatch_mvi!(self, session, SessionReducer, SessionIntent::WordOfTheDayLoaded(entry));
            }
            Outcome::Phrases { category, phrases } => {
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::PhrasesLoaded { category, phrases }
                );
            }
            Outcome::Questions {
                test_type,
                questions,
            } => {
                if questions.is_empty() {
                    tracing::warn!(test_type = %test_type, "No quiz questions available");
                }
                dispatch_mvi!(
                    self,
                    quiz,
                    QuizReducer,
                    QuizIntent::QuestionsLoaded {
                        test_type,
                        questions,
                    }
                );
            }
        }
    }

    async fn run(&mut self, pending: Pending) {
        let outcome = pending.await;
        self.apply(outcome);
    }

    // ---------------------------------------------------------------------
    // Navigation and search
    // ---------------------------------------------------------------------

    pub fn navigate(&mut self, view: View) {
        tracing::debug!(view = view.as_str(), "Navigate");
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::Navigate(view));
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::SetQuery(query.into()));
    }

    pub fn set_language(&mut self, language: SourceLanguage) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::SetLanguage(language));
    }

    /// Start looking up the current query: switches to the search view and
    /// marks the lookup in flight. `None` for a blank query, which changes
    /// nothing.
    pub fn begin_lookup(&mut self) -> Option<Pending> {
        let term = self.session.query.trim().to_string();
        if term.is_empty() {
            return None;
        }
        let language = self.session.language;
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::LookupStarted);

        let gateway = Arc::clone(&self.gateway);
        Some(Box::pin(async move {
            Outcome::Lookup(gateway.lookup(&term, language).await)
        }))
    }

    /// Look up the current query. Returns `false` without doing anything
    /// when the query is blank.
    pub async fn submit_lookup(&mut self) -> bool {
        match self.begin_lookup() {
            Some(pending) => {
                self.run(pending).await;
                true
            }
            None => false,
        }
    }

    /// Replace the query with `term` and look it up.
    pub async fn lookup(&mut self, term: &str) -> bool {
        self.set_query(term);
        self.submit_lookup().await
    }

    pub fn begin_word_of_the_day(&self) -> Pending {
        let gateway = Arc::clone(&self.gateway);
        Box::pin(async move { Outcome::WordOfTheDay(gateway.word_of_the_day().await) })
    }

    /// Fetch the daily entry. A failure leaves it unloaded.
    pub async fn load_word_of_the_day(&mut self) {
        let pending = self.begin_word_of_the_day();
        self.run(pending).await;
    }

    /// Open the full entry for the word of the day. Returns `false` if it
    /// has not loaded yet.
    pub async fn explore_word_of_the_day(&mut self) -> bool {
        let Some(word) = self.session.word_of_the_day.as_ref().map(|e| e.word.clone()) else {
            return false;
        };
        self.lookup(&word).await
    }

    pub async fn open_favorite(&mut self, word: &str) -> bool {
        self.lookup(word).await
    }

    /// Look up an alphabet letter, always as Luganda.
    pub async fn search_letter(&mut self, letter: &str) -> bool {
        self.set_language(SourceLanguage::Luganda);
        self.lookup(letter).await
    }

    // ---------------------------------------------------------------------
    // Phrasebook
    // ---------------------------------------------------------------------

    /// Open `category` with an empty, loading phrase list.
    pub fn begin_category(&mut self, category: &str) -> Pending {
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::CategorySelected(category.to_string())
        );

        let gateway = Arc::clone(&self.gateway);
        let category = category.to_string();
        Box::pin(async move {
            let phrases = gateway.phrases_for_category(&category).await;
            Outcome::Phrases { category, phrases }
        })
    }

    pub async fn select_category(&mut self, category: &str) {
        let pending = self.begin_category(category);
        self.run(pending).await;
    }

    pub fn back_to_categories(&mut self) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::BackToCategories);
    }

    // ---------------------------------------------------------------------
    // Favorites
    // ---------------------------------------------------------------------

    pub fn is_favorite(&self, word: &str) -> bool {
        self.favorites.contains(word)
    }

    /// Add or remove `entry` by word, then rewrite the whole set.
    pub fn toggle_favorite(&mut self, entry: &DictionaryEntry) -> Toggle {
        let toggle = self.favorites.toggle(entry);
        tracing::debug!(word = %entry.word, ?toggle, "Toggled favorite");
        if let Err(e) = self.store.save_favorites(self.favorites.entries()) {
            tracing::warn!(error = %e, "Failed to persist favorites");
        }
        toggle
    }

    // ---------------------------------------------------------------------
    // Quiz
    // ---------------------------------------------------------------------

    /// Discard any quiz on screen, switch to the quiz view in its loading
    /// phase, and request questions labelled `test_type`.
    pub fn begin_quiz(&mut self, test_type: &str) -> Pending {
        dispatch_mvi!(
            self,
            quiz,
            QuizReducer,
            QuizIntent::Start {
                test_type: test_type.to_string(),
            }
        );
        self.navigate(View::Quiz);

        let gateway = Arc::clone(&self.gateway);
        let test_type = test_type.to_string();
        Box::pin(async move {
            let questions = gateway.generate_quiz(QUIZ_LENGTH, &test_type).await;
            Outcome::Questions {
                test_type,
                questions,
            }
        })
    }

    pub async fn start_quiz(&mut self, test_type: &str) {
        let pending = self.begin_quiz(test_type);
        self.run(pending).await;
    }

    pub async fn start_default_quiz(&mut self) {
        self.start_quiz(DEFAULT_TEST_TYPE).await;
    }

    /// Start one of the catalogued assessments; its title labels the quiz.
    pub async fn start_assessment(&mut self, assessment: &Assessment) {
        self.start_quiz(assessment.title).await;
    }

    pub fn answer(&mut self, option: &str) {
        dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::Answer(option.to_string()));
    }

    /// Move past the current explanation. Returns the committed result
    /// when this finishes the quiz.
    pub fn advance(&mut self) -> Option<TestResult> {
        let was_finished = self.quiz.is_finished();
        dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::Advance);

        let result = match &self.quiz {
            QuizState::Finished {
                test_type,
                score,
                total,
            } if !was_finished => TestResult {
                id: Uuid::new_v4().to_string(),
                date: RecordedAt::now(),
                score: *score,
                total: *total,
                test_type: test_type.clone(),
            },
            _ => return None,
        };
        self.commit_result(result.clone());
        Some(result)
    }

    fn commit_result(&mut self, result: TestResult) {
        tracing::info!(
            test_type = %result.test_type,
            score = result.score,
            total = result.total,
            "Quiz finished"
        );
        self.history.record(result);
        if let Err(e) = self.store.save_history(self.history.entries()) {
            tracing::warn!(error = %e, "Failed to persist test history");
        }
    }

    pub fn tests_overview(&self) -> TestsOverview {
        TestsOverview {
            average_score: self.history.average_score(),
            completed: self.history.len(),
        }
    }

    // ---------------------------------------------------------------------
    // Pronunciation
    // ---------------------------------------------------------------------

    /// Synthesize and decode `text`. `None` when synthesis returned
    /// nothing or the payload could not be decoded.
    pub async fn speak(&self, text: &str) -> Option<PcmClip> {
        let payload = self.gateway.synthesize_speech(text).await;
        if payload.is_empty() {
            return None;
        }
        match PcmClip::from_base64(&payload) {
            Ok(clip) => Some(clip),
            Err(e) => {
                tracing::warn!(error = %e, "Audio playback error");
                None
            }
        }
    }
}
