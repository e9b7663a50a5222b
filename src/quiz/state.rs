//! State for the quiz lifecycle.

use crate::model::QuizQuestion;
use crate::mvi::UiState;

/// Number of questions requested per quiz.
pub const QUIZ_LENGTH: usize = 5;

/// Label used when a quiz is started without choosing an assessment.
pub const DEFAULT_TEST_TYPE: &str = "General Knowledge";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizState {
    /// No quiz has been started.
    #[default]
    Idle,

    /// Waiting for the gateway to generate questions.
    Loading { test_type: String },

    /// Generation produced no usable questions.
    Unavailable { test_type: String },

    InProgress {
        test_type: String,
        questions: Vec<QuizQuestion>,
        /// Always within `0..questions.len()`.
        index: usize,
        score: u32,
        explanation_shown: bool,
        /// Option picked for the current question, once answered.
        chosen: Option<String>,
    },

    Finished {
        test_type: String,
        score: u32,
        total: u32,
    },
}

impl UiState for QuizState {}

impl QuizState {
    pub fn test_type(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { test_type }
            | Self::Unavailable { test_type }
            | Self::InProgress { test_type, .. }
            | Self::Finished { test_type, .. } => Some(test_type.as_str()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self {
            Self::InProgress {
                questions, index, ..
            } => questions.get(*index),
            _ => None,
        }
    }

    /// Current score; zero before any quiz has produced questions.
    pub fn score(&self) -> u32 {
        match self {
            Self::InProgress { score, .. } | Self::Finished { score, .. } => *score,
            _ => 0,
        }
    }

    /// `(1-based position, total)` while a quiz is in progress.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self {
            Self::InProgress {
                questions, index, ..
            } => Some((index + 1, questions.len())),
            _ => None,
        }
    }

    pub fn explanation_shown(&self) -> bool {
        matches!(
            self,
            Self::InProgress {
                explanation_shown: true,
                ..
            }
        )
    }

    pub fn chosen(&self) -> Option<&str> {
        match self {
            Self::InProgress { chosen, .. } => chosen.as_deref(),
            _ => None,
        }
    }

    /// True when answering the current question and advancing would
    /// finish the quiz.
    pub fn on_last_question(&self) -> bool {
        match self {
            Self::InProgress {
                questions, index, ..
            } => index + 1 == questions.len(),
            _ => false,
        }
    }
}
