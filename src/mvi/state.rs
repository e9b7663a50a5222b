//! Marker trait for reducer-owned state.

/// States are cloneable values holding everything a view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
