//! Model-View-Intent primitives shared by the session and quiz machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! Reducers are pure. Gateway calls and store writes happen in
//! [`crate::app::Lexicon`], which feeds their outcomes back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
