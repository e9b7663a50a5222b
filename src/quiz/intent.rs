//! Intents for the quiz lifecycle.

use crate::model::QuizQuestion;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// Begin generating a quiz with the given label. Discards any quiz
    /// already on screen.
    Start { test_type: String },

    /// Generation for `test_type` finished. Empty means nothing usable
    /// came back.
    QuestionsLoaded {
        test_type: String,
        questions: Vec<QuizQuestion>,
    },

    /// User picked an option for the current question.
    Answer(String),

    /// User moved on from the explanation.
    Advance,
}

impl Intent for QuizIntent {}
