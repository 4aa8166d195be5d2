//! Marker trait for intents.

/// An action handed to a [`Reducer`](super::Reducer).
///
/// Intents are plain data: a digit key, an operation button, a clear.
pub trait Intent: Send + 'static {}
