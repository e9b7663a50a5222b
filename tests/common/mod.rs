//! Shared test utilities: a scripted gateway and record builders.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use async_trait::async_trait;
use luganda_lexicon::gateway::ContentGateway;
use luganda_lexicon::model::{DictionaryEntry, Example, Phrase, QuizQuestion, SourceLanguage};
use luganda_lexicon::store::{MemoryBackend, PersistenceStore};
use luganda_lexicon::Lexicon;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

// -- Builders -----------------------------------------------------------------

pub fn entry(word: &str, translation: &str) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        pronunciation: Some(word.to_lowercase()),
        part_of_speech: "noun".to_string(),
        noun_class: Some("mu-ba".to_string()),
        translation: translation.to_string(),
        definition: format!("The Luganda word for {}.", translation),
        examples: vec![Example {
            luganda: format!("{} ali wano.", word),
            english: format!("The {} is here.", translation),
        }],
        synonyms: vec![],
    }
}

pub fn phrase(category: &str, luganda: &str, english: &str) -> Phrase {
    Phrase {
        category: category.to_string(),
        luganda: luganda.to_string(),
        english: english.to_string(),
    }
}

/// A question whose correct answer is always "right".
pub fn question(n: usize) -> QuizQuestion {
    QuizQuestion {
        question: format!("Question {}?", n),
        options: vec!["right".into(), "wrong".into(), "also wrong".into()],
        correct_answer: "right".into(),
        explanation: format!("Explanation {}.", n),
    }
}

pub fn questions(count: usize) -> Vec<QuizQuestion> {
    (1..=count).map(question).collect()
}

// -- Scripted gateway ---------------------------------------------------------

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Lookup(String, SourceLanguage),
    WordOfTheDay,
    Phrases(String),
    Quiz(usize, String),
    Speech(String),
}

/// In-process `ContentGateway` answering from scripted data.
///
/// Unscripted lookups and categories return the empty value, the same
/// as a failed call against the real service.
#[derive(Default)]
pub struct FakeGateway {
    entries: Mutex<HashMap<String, DictionaryEntry>>,
    word_of_the_day: Mutex<Option<DictionaryEntry>>,
    phrases: Mutex<HashMap<String, Vec<Phrase>>>,
    quizzes: Mutex<VecDeque<Vec<QuizQuestion>>>,
    speech: Mutex<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, term: &str, entry: DictionaryEntry) -> Self {
        self.entries.lock().insert(term.to_string(), entry);
        self
    }

    pub fn with_word_of_the_day(self, entry: DictionaryEntry) -> Self {
        *self.word_of_the_day.lock() = Some(entry);
        self
    }

    pub fn with_phrases(self, category: &str, phrases: Vec<Phrase>) -> Self {
        self.phrases.lock().insert(category.to_string(), phrases);
        self
    }

    /// Queue a quiz; each `generate_quiz` call takes the next one.
    pub fn with_quiz(self, questions: Vec<QuizQuestion>) -> Self {
        self.quizzes.lock().push_back(questions);
        self
    }

    pub fn with_speech(self, payload: &str) -> Self {
        *self.speech.lock() = payload.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ContentGateway for FakeGateway {
    async fn lookup(&self, term: &str, language: SourceLanguage) -> Option<DictionaryEntry> {
        self.calls.lock().push(Call::Lookup(term.to_string(), language));
        self.entries.lock().get(term).cloned()
    }

    async fn word_of_the_day(&self) -> Option<DictionaryEntry> {
        self.calls.lock().push(Call::WordOfTheDay);
        self.word_of_the_day.lock().clone()
    }

    async fn phrases_for_category(&self, category: &str) -> Vec<Phrase> {
        self.calls.lock().push(Call::Phrases(category.to_string()));
        self.phrases.lock().get(category).cloned().unwrap_or_default()
    }

    async fn generate_quiz(&self, count: usize, test_type: &str) -> Vec<QuizQuestion> {
        self.calls
            .lock()
            .push(Call::Quiz(count, test_type.to_string()));
        let mut questions = self.quizzes.lock().pop_front().unwrap_or_default();
        questions.truncate(count);
        questions
    }

    async fn synthesize_speech(&self, text: &str) -> String {
        self.calls.lock().push(Call::Speech(text.to_string()));
        self.speech.lock().clone()
    }
}

// -- Lexicon helpers ----------------------------------------------------------

pub type TestLexicon = Lexicon<FakeGateway, Arc<MemoryBackend>>;

/// Build a lexicon over a shared in-memory store. The returned backend
/// can seed records or build a second lexicon to simulate a restart.
pub fn make_lexicon(gateway: FakeGateway) -> (TestLexicon, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let lexicon = Lexicon::new(gateway, PersistenceStore::new(backend.clone()));
    (lexicon, backend)
}

pub fn reopen(gateway: FakeGateway, backend: &Arc<MemoryBackend>) -> TestLexicon {
    Lexicon::new(gateway, PersistenceStore::new(backend.clone()))
}

/// Answer every remaining question, choosing the correct option for the
/// first `correct` of them, and advance through each explanation.
pub fn play_quiz(lexicon: &mut TestLexicon, correct: usize) {
    let mut answered = 0;
    while let Some(question) = lexicon.quiz().current_question().cloned() {
        let choice = if answered < correct {
            question.correct_answer.clone()
        } else {
            question
                .options
                .iter()
                .find(|o| **o != question.correct_answer)
                .cloned()
                .expect("question has a wrong option")
        };
        lexicon.answer(&choice);
        lexicon.advance();
        answered += 1;
    }
}
