//! Content Service Gateway: typed access to the generative service.
//!
//! Every operation returns a populated value or an explicit empty one.
//! Transport errors, bad status codes and malformed responses are logged
//! inside the implementation and never reach the caller.

mod error;
mod gemini;
mod prompts;
mod schema;

pub use error::GatewayError;
pub use gemini::GeminiGateway;

use async_trait::async_trait;

use crate::model::{DictionaryEntry, Phrase, QuizQuestion, SourceLanguage};

/// Phrases requested per category.
pub const PHRASE_BATCH: usize = 6;

/// Sample rate of synthesized speech, mono signed 16-bit PCM.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// The external content service as the rest of the crate sees it.
///
/// Calls are single attempts with no retry and no timeout of their own.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Dictionary entry for `term`, or `None` if nothing usable came back.
    async fn lookup(&self, term: &str, language: SourceLanguage) -> Option<DictionaryEntry>;

    /// Today's featured Luganda word; `None` means "not loaded".
    async fn word_of_the_day(&self) -> Option<DictionaryEntry>;

    /// Up to [`PHRASE_BATCH`] phrases for `category`; empty on failure.
    async fn phrases_for_category(&self, category: &str) -> Vec<Phrase>;

    /// Up to `count` answerable questions labelled `test_type`; empty on failure.
    async fn generate_quiz(&self, count: usize, test_type: &str) -> Vec<QuizQuestion>;

    /// Base64 PCM audio for `text`, or an empty string on failure.
    async fn synthesize_speech(&self, text: &str) -> String;
}
