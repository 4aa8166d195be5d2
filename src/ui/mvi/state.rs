//! Marker trait for reducer state.

/// State records are cloned to snapshot, compared to detect changes, and
/// start out as `Default` (the empty calculator).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
