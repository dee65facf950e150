use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, LoadingIndicator, ResultCard};

/// Reducer for summary form state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::TextChanged { text } => FormState {
                text_input: text,
                // Typed text wins over a stale file selection
                file_input: None,
                ..state
            },

            FormIntent::FileSelected { file } => FormState {
                file_input: Some(file),
                ..state
            },

            FormIntent::FileCleared => FormState {
                file_input: None,
                ..state
            },

            FormIntent::CycleSummaryType { forward } => {
                let len = state.summary_types.len();
                if len == 0 {
                    return state;
                }
                let current = state.selected_type.min(len - 1);
                let selected_type = if forward {
                    (current + 1) % len
                } else if current == 0 {
                    len - 1
                } else {
                    current - 1
                };
                FormState {
                    selected_type,
                    ..state
                }
            }

            FormIntent::SubmitStarted => FormState {
                result_card: ResultCard::Hidden,
                loading: LoadingIndicator::Visible { animation_tick: 0 },
                alert: None,
                ..state
            },

            FormIntent::SummaryReceived { response } => FormState {
                loading: LoadingIndicator::Hidden,
                result_card: ResultCard::Visible {
                    response,
                    scroll: 0,
                },
                ..state
            },

            // Result card is left as is: an earlier submission may have filled it
            FormIntent::SubmitFailed { message } => FormState {
                loading: LoadingIndicator::Hidden,
                alert: Some(message),
                ..state
            },

            FormIntent::AlertDismissed => FormState {
                alert: None,
                ..state
            },

            FormIntent::ScrollResult { delta, max_scroll } => match state.result_card {
                ResultCard::Visible { response, scroll } => {
                    let scroll = (scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
                    FormState {
                        result_card: ResultCard::Visible { response, scroll },
                        ..state
                    }
                }
                ResultCard::Hidden => state,
            },

            FormIntent::ShowNotice { notice } => FormState {
                notice: Some(notice),
                ..state
            },

            FormIntent::Tick => {
                let loading = match state.loading {
                    LoadingIndicator::Visible { animation_tick } => LoadingIndicator::Visible {
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    LoadingIndicator::Hidden => LoadingIndicator::Hidden,
                };
                let notice = state.notice.and_then(|mut notice| {
                    notice.ticks_left = notice.ticks_left.saturating_sub(1);
                    (notice.ticks_left > 0).then_some(notice)
                });
                FormState {
                    loading,
                    notice,
                    ..state
                }
            }
        }
    }
}
