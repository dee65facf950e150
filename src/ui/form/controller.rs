//! Wires form input to the summarization request and reflects its outcome.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::api::{summarize_selection, SelectedFile, SummarizeError, SummaryResponse, SummaryService};
use crate::clipboard::ClipboardSink;
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::{FormState, Notice};
use super::view::wrapped_height;

pub struct SummaryFormController {
    state: FormState,
    service: Arc<dyn SummaryService>,
    clipboard: Box<dyn ClipboardSink>,
    events: Sender<AppEvent>,
    runtime: Handle,
    submissions: u64,
    /// Inner width of the result card, used to bound scrolling.
    result_width: u16,
}

impl SummaryFormController {
    pub fn new(
        state: FormState,
        service: Arc<dyn SummaryService>,
        clipboard: Box<dyn ClipboardSink>,
        events: Sender<AppEvent>,
        runtime: Handle,
    ) -> Self {
        Self {
            state,
            service,
            clipboard,
            events,
            runtime,
            submissions: 0,
            result_width: u16::MAX,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    // ========================================================================
    // Text input
    // ========================================================================

    /// Text input now holds `text`: updates the counter and drops any
    /// selected file so the next submit sends the typed text.
    pub fn on_text_changed(&mut self, text: String) {
        self.dispatch(FormIntent::TextChanged { text });
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.state.text_input.clone();
        text.push(ch);
        self.on_text_changed(text);
    }

    pub fn insert_str(&mut self, pasted: &str) {
        let mut text = self.state.text_input.clone();
        text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
        self.on_text_changed(text);
    }

    pub fn delete_backward(&mut self) {
        let mut text = self.state.text_input.clone();
        if text.pop().is_some() {
            self.on_text_changed(text);
        }
    }

    // ========================================================================
    // File and summary type selection
    // ========================================================================

    /// Select the file at `path`. Returns false (with a notice) when it is
    /// not a readable regular file.
    pub fn select_file(&mut self, path: PathBuf) -> bool {
        if !path.is_file() {
            self.dispatch(FormIntent::ShowNotice {
                notice: Notice::error(format!("No such file: {}", path.display())),
            });
            return false;
        }
        let file = SelectedFile::new(path);
        tracing::debug!(file = %file.name, "File selected");
        self.dispatch(FormIntent::FileSelected { file });
        true
    }

    pub fn clear_file(&mut self) {
        self.dispatch(FormIntent::FileCleared);
    }

    pub fn cycle_summary_type(&mut self, forward: bool) {
        self.dispatch(FormIntent::CycleSummaryType { forward });
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Send the current selection to the server.
    ///
    /// Hides the result card and shows the loading indicator before the
    /// request is spawned. The outcome arrives later as
    /// [`AppEvent::SummaryFinished`]. Returns the submission number.
    pub fn submit(&mut self) -> u64 {
        self.submissions += 1;
        let submission = self.submissions;

        self.dispatch(FormIntent::SubmitStarted);

        let file = self.state.file_input.clone();
        let text_input = self.state.text_input.clone();
        let summary_type = self.state.summary_type().to_string();

        tracing::info!(
            submission,
            summary_type = %summary_type,
            has_file = file.is_some(),
            "Submitting text for summarization"
        );

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome =
                summarize_selection(service.as_ref(), file, text_input, summary_type).await;
            if events
                .send(AppEvent::SummaryFinished {
                    submission,
                    outcome,
                })
                .is_err()
            {
                tracing::trace!(submission, "Submission result dropped (receiver gone)");
            }
        });

        submission
    }

    /// Apply a finished submission to the form.
    pub fn on_summary_finished(
        &mut self,
        submission: u64,
        outcome: Result<SummaryResponse, SummarizeError>,
    ) {
        match outcome {
            Ok(response) => {
                tracing::info!(
                    submission,
                    summary_chars = response.summary.chars().count(),
                    "Summary received"
                );
                self.dispatch(FormIntent::SummaryReceived { response });
            }
            Err(err) => {
                if err.is_server_reported() {
                    tracing::info!(submission, error = %err, "Server rejected submission");
                } else {
                    tracing::warn!(submission, error = %err, "Submission failed");
                }
                self.dispatch(FormIntent::SubmitFailed {
                    message: err.user_message(),
                });
            }
        }
    }

    // ========================================================================
    // Result card
    // ========================================================================

    /// Copy the displayed summary's plain text to the clipboard.
    ///
    /// Does nothing when no summary is shown. Failures become a footer
    /// notice; they never block the form.
    pub fn copy_result(&mut self) {
        let Some(summary) = self.state.displayed_summary().map(str::to_owned) else {
            return;
        };

        let notice = match self.clipboard.set_text(&summary) {
            Ok(()) => Notice::info("Summary copied to clipboard"),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard copy failed");
                Notice::error(err.to_string())
            }
        };
        self.dispatch(FormIntent::ShowNotice { notice });
    }

    /// Width the result card wraps at. Until a size is known every summary
    /// line counts as one row.
    pub fn set_result_width(&mut self, width: u16) {
        self.result_width = width;
    }

    /// Scroll the result card; the top row never passes the last wrapped row.
    pub fn scroll_result(&mut self, delta: i32) {
        let Some(summary) = self.state.displayed_summary() else {
            return;
        };
        let max_scroll = wrapped_height(summary, self.result_width).saturating_sub(1);
        self.dispatch(FormIntent::ScrollResult { delta, max_scroll });
    }

    pub fn dismiss_alert(&mut self) {
        self.dispatch(FormIntent::AlertDismissed);
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.dispatch(FormIntent::ShowNotice { notice });
    }

    pub fn on_tick(&mut self) {
        self.dispatch(FormIntent::Tick);
    }
}
