//! Marker trait for intents.

/// User actions (navigation, answers) and completions of gateway calls.
pub trait Intent: Send + 'static {}
