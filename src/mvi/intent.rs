//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents describe something that happened (a refresh was requested, a
/// query resolved or failed). Reducers fold them into new states.
pub trait Intent: Send + 'static {}
