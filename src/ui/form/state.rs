//! State for the summary form.

use crate::api::{SelectedFile, SummaryResponse};
use crate::ui::mvi::UiState;

/// How many ticks a notice stays in the footer (3s at the 250ms tick rate).
pub const NOTICE_TICKS: u8 = 12;

/// Spinner shown while a response is pending.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingIndicator {
    #[default]
    Hidden,
    Visible {
        /// Animation tick for spinner.
        animation_tick: u8,
    },
}

/// Region displaying the returned summary.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultCard {
    #[default]
    Hidden,
    Visible {
        response: SummaryResponse,
        /// First rendered line shown in the card.
        scroll: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Footer message that does not block input.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub ticks_left: u8,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            ticks_left: NOTICE_TICKS,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            ticks_left: NOTICE_TICKS,
        }
    }
}

/// Everything the form shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub text_input: String,
    pub file_input: Option<SelectedFile>,
    /// Options of the summary-type selector.
    pub summary_types: Vec<String>,
    /// Index into `summary_types`.
    pub selected_type: usize,
    pub result_card: ResultCard,
    pub loading: LoadingIndicator,
    /// Blocking notification; input is ignored until dismissed.
    pub alert: Option<String>,
    pub notice: Option<Notice>,
}

impl UiState for FormState {}

impl FormState {
    pub fn new(summary_types: Vec<String>, selected_type: usize) -> Self {
        let selected_type = selected_type.min(summary_types.len().saturating_sub(1));
        Self {
            summary_types,
            selected_type,
            ..Self::default()
        }
    }

    /// Counter text, e.g. `"11 chars"`. Counts Unicode scalar values, so an
    /// emoji outside the BMP is one char here where a browser's UTF-16
    /// `length` would report two.
    pub fn char_count_label(&self) -> String {
        format!("{} chars", self.text_input.chars().count())
    }

    /// Currently selected summary type, or `""` when no options exist.
    pub fn summary_type(&self) -> &str {
        self.summary_types
            .get(self.selected_type)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.loading, LoadingIndicator::Visible { .. })
    }

    pub fn is_result_visible(&self) -> bool {
        matches!(self.result_card, ResultCard::Visible { .. })
    }

    /// Plain text of the summary currently on screen.
    pub fn displayed_summary(&self) -> Option<&str> {
        match &self.result_card {
            ResultCard::Visible { response, .. } => Some(&response.summary),
            ResultCard::Hidden => None,
        }
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<String> {
        vec!["short".into(), "medium".into(), "long".into()]
    }

    #[test]
    fn default_hides_everything() {
        let state = FormState::default();
        assert!(!state.is_loading());
        assert!(!state.is_result_visible());
        assert!(!state.has_alert());
        assert_eq!(state.char_count_label(), "0 chars");
    }

    #[test]
    fn new_clamps_selected_type() {
        let state = FormState::new(types(), 7);
        assert_eq!(state.summary_type(), "long");
    }

    #[test]
    fn summary_type_empty_without_options() {
        let state = FormState::new(Vec::new(), 0);
        assert_eq!(state.summary_type(), "");
    }

    #[test]
    fn char_count_counts_chars_not_bytes() {
        let state = FormState {
            text_input: "héllo wörld".into(),
            ..FormState::default()
        };
        assert_eq!(state.char_count_label(), "11 chars");
    }

    #[test]
    fn emoji_counts_as_one_char() {
        let state = FormState {
            text_input: "ok 🙂".into(),
            ..FormState::default()
        };
        assert_eq!(state.char_count_label(), "4 chars");
    }

    #[test]
    fn displayed_summary_only_when_visible() {
        let mut state = FormState::default();
        assert_eq!(state.displayed_summary(), None);
        state.result_card = ResultCard::Visible {
            response: SummaryResponse {
                summary: "done".into(),
                summary_type: None,
                original_length: None,
                summary_length: None,
            },
            scroll: 0,
        };
        assert_eq!(state.displayed_summary(), Some("done"));
    }
}
