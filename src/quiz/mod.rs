//! Quiz lifecycle: generation, answering, scoring, completion.
//!
//! Uses the MVI layout shared with the session machine:
//! - `state.rs` - quiz phases
//! - `intent.rs` - start, answer, advance
//! - `reducer.rs` - transitions
//! - `history.rs` - capped result history and score statistics

mod history;
mod intent;
mod reducer;
mod state;

pub use history::{average_score, TestHistory, HISTORY_LIMIT};
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{QuizState, DEFAULT_TEST_TYPE, QUIZ_LENGTH};
