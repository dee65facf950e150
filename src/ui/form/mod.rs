//! Summary form feature module.
//!
//! The terminal counterpart of a summarization web form: a text area with a
//! character counter, an optional file, a summary-type selector, a loading
//! indicator and a result card.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state (one field per on-screen element)
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `controller.rs` - Side effects: spawning requests, clipboard
//! - `view.rs` - Rendering

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::SummaryFormController;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, LoadingIndicator, Notice, NoticeKind, ResultCard, NOTICE_TICKS};
pub use view::{render_form, summary_lines, summary_meta, wrap_text, wrapped_height};
