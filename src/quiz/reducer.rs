//! Reducer for the quiz lifecycle.

use crate::mvi::Reducer;

use super::intent::QuizIntent;
use super::state::QuizState;

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::Start { test_type } => QuizState::Loading { test_type },

            QuizIntent::QuestionsLoaded {
                test_type: generated_for,
                questions,
            } => match state {
                QuizState::Loading { test_type } if test_type != generated_for => {
                    tracing::debug!(
                        loading = %test_type,
                        generated_for = %generated_for,
                        "Dropping questions for a replaced quiz"
                    );
                    QuizState::Loading { test_type }
                }
                QuizState::Loading { test_type } if questions.is_empty() => {
                    QuizState::Unavailable { test_type }
                }
                QuizState::Loading { test_type } => QuizState::InProgress {
                    test_type,
                    questions,
                    index: 0,
                    score: 0,
                    explanation_shown: false,
                    chosen: None,
                },
                // Nothing is waiting for questions: the quiz they were
                // generated for has been replaced.
                other => other,
            },

            QuizIntent::Answer(option) => match state {
                QuizState::InProgress {
                    test_type,
                    questions,
                    index,
                    score,
                    explanation_shown: false,
                    ..
                } => {
                    let correct = questions
                        .get(index)
                        .is_some_and(|q| q.is_correct(&option));
                    QuizState::InProgress {
                        test_type,
                        questions,
                        index,
                        score: if correct { score + 1 } else { score },
                        explanation_shown: true,
                        chosen: Some(option),
                    }
                }
                other => other,
            },

            QuizIntent::Advance => match state {
                QuizState::InProgress {
                    test_type,
                    questions,
                    index,
                    score,
                    explanation_shown: true,
                    ..
                } => {
                    if index + 1 < questions.len() {
                        QuizState::InProgress {
                            test_type,
                            questions,
                            index: index + 1,
                            score,
                            explanation_shown: false,
                            chosen: None,
                        }
                    } else {
                        QuizState::Finished {
                            test_type,
                            score,
                            total: u32::try_from(questions.len()).unwrap_or(u32::MAX),
                        }
                    }
                }
                other => other,
            },
        }
    }
}
