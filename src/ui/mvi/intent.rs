//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - Routed child actions (an index plus the child's own intent)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
