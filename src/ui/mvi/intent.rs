/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, submitting, copying) or system
/// events (a response arriving, a timer tick).
pub trait Intent: Send + 'static {}
