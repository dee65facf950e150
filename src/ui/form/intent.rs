use crate::api::{SelectedFile, SummaryResponse};
use crate::ui::mvi::Intent;

use super::state::Notice;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Text input now holds `text`. Clears any selected file.
    TextChanged { text: String },

    FileSelected { file: SelectedFile },

    FileCleared,

    /// Move the summary-type selector one option forward or back (wrapping).
    CycleSummaryType { forward: bool },

    /// A submission was sent: hide the result, show the spinner.
    SubmitStarted,

    /// A submission came back with a summary.
    SummaryReceived { response: SummaryResponse },

    /// A submission failed; `message` is shown as a blocking alert.
    SubmitFailed { message: String },

    AlertDismissed,

    /// Move the result card by `delta` rows, staying within `0..=max_scroll`.
    ScrollResult { delta: i32, max_scroll: u16 },

    ShowNotice { notice: Notice },

    /// Timer tick (spinner animation, notice expiry).
    Tick,
}

impl Intent for FormIntent {}
