//! Session state machine: active view, lookup, word of the day, phrasebook.
//!
//! - `state.rs` - session state and derived search status
//! - `intent.rs` - navigation, lookup and phrasebook events
//! - `reducer.rs` - transitions

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{LookupOutcome, PhrasebookState, SearchStatus, SessionState};
