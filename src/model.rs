//! Domain records shared by the gateway, the store and the state machines.
//!
//! Serialized field names match the camelCase shape the generative service
//! is asked to produce, so the same structs parse responses and persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Views of the single-page client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Search,
    Phrasebook,
    Favorites,
    Quiz,
    Tests,
    Phonetics,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            Self::Home,
            Self::Search,
            Self::Phrasebook,
            Self::Favorites,
            Self::Quiz,
            Self::Tests,
            Self::Phonetics,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Phrasebook => "phrasebook",
            Self::Favorites => "favorites",
            Self::Quiz => "quiz",
            Self::Tests => "tests",
            Self::Phonetics => "phonetics",
        }
    }
}

/// Language the looked-up term is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    #[default]
    Luganda,
    English,
}

impl SourceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Luganda => "luganda",
            Self::English => "english",
        }
    }

    /// The language the lookup translates into.
    pub fn other(&self) -> Self {
        match self {
            Self::Luganda => Self::English,
            Self::English => Self::Luganda,
        }
    }
}

/// A usage example pairing a Luganda sentence with its English rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub luganda: String,
    pub english: String,
}

/// One dictionary record. Identity is `word`, compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noun_class: Option<String>,
    pub translation: String,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl DictionaryEntry {
    /// True when both records name the same word.
    pub fn same_word(&self, other: &DictionaryEntry) -> bool {
        self.word == other.word
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub category: String,
    pub luganda: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuizQuestion {
    /// Exact string comparison against the correct answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    /// Whether the correct answer is one of the offered options.
    pub fn is_answerable(&self) -> bool {
        self.options.iter().any(|o| o == &self.correct_answer)
    }
}

/// When a quiz was completed.
///
/// Results written by this crate carry a UTC timestamp. Unversioned
/// history from earlier clients stores a locale-formatted date such as
/// `"3/1/2026"`; that text is kept verbatim so it survives a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedAt {
    Timestamp(DateTime<Utc>),
    Legacy(String),
}

impl RecordedAt {
    pub fn now() -> Self {
        Self::Timestamp(Utc::now())
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(at) => Some(*at),
            Self::Legacy(_) => None,
        }
    }
}

impl From<DateTime<Utc>> for RecordedAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Timestamp(at)
    }
}

impl std::fmt::Display for RecordedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timestamp(at) => write!(f, "{}", at.format("%Y-%m-%d")),
            Self::Legacy(text) => f.write_str(text),
        }
    }
}

/// Outcome of one completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub date: RecordedAt,
    pub score: u32,
    pub total: u32,
    #[serde(rename = "type")]
    pub test_type: String,
}

impl TestResult {
    /// Fraction of correct answers; a zero-question result counts as 0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total)
    }
}
