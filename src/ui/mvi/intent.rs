//! Marker trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (submit, toggle, share) or results of
/// side effects (a finished generation, a clipboard write). They may cross
/// threads, since generation results arrive from the async runtime.
pub trait Intent: Send + 'static {}
