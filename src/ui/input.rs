use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved per PageUp/PageDown in the result card.
const RESULT_SCROLL_STEP: i32 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Blocking alert: nothing else reacts until it is dismissed
    if app.form().state().has_alert() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.form_mut().dismiss_alert();
        }
        return;
    }

    if app.focus() == Focus::FilePrompt {
        handle_prompt_key(app, key);
        return;
    }

    if is_ctrl_char(key, 's') {
        app.form_mut().submit();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.form_mut().copy_result();
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.open_file_prompt();
        return;
    }
    if is_ctrl_char(key, 'x') {
        app.form_mut().clear_file();
        return;
    }

    match key.code {
        KeyCode::Tab => app.form_mut().cycle_summary_type(true),
        KeyCode::BackTab => app.form_mut().cycle_summary_type(false),
        KeyCode::PageUp => app.form_mut().scroll_result(-RESULT_SCROLL_STEP),
        KeyCode::PageDown => app.form_mut().scroll_result(RESULT_SCROLL_STEP),
        KeyCode::Enter => app.form_mut().insert_char('\n'),
        KeyCode::Backspace => app.form_mut().delete_backward(),
        KeyCode::Char(ch) if is_plain(key) => app.form_mut().insert_char(ch),
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_file_prompt(),
        KeyCode::Enter => app.confirm_file_prompt(),
        KeyCode::Backspace => app.prompt_backspace(),
        KeyCode::Char(ch) if is_plain(key) => {
            let mut buffer = [0u8; 4];
            app.prompt_insert(ch.encode_utf8(&mut buffer));
        }
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::test_support::make_app;
    use crossterm::event::KeyEventState;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_updates_text_and_counter() {
        let mut t = make_app();
        type_str(&mut t.app, "Hi");
        handle_key(&mut t.app, press(KeyCode::Enter));
        type_str(&mut t.app, "there");
        let state = t.app.form().state();
        assert_eq!(state.text_input, "Hi\nthere");
        assert_eq!(state.char_count_label(), "8 chars");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut t = make_app();
        type_str(&mut t.app, "abc");
        handle_key(&mut t.app, press(KeyCode::Backspace));
        assert_eq!(t.app.form().state().text_input, "ab");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut t = make_app();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut t.app, key);
        assert_eq!(t.app.form().state().text_input, "");
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut t = make_app();
        handle_key(&mut t.app, ctrl('x'));
        assert_eq!(t.app.form().state().text_input, "");
    }

    #[test]
    fn tab_cycles_summary_type() {
        let mut t = make_app();
        handle_key(&mut t.app, press(KeyCode::Tab));
        assert_eq!(t.app.form().state().summary_type(), "long");
        handle_key(&mut t.app, press(KeyCode::BackTab));
        assert_eq!(t.app.form().state().summary_type(), "medium");
    }

    #[test]
    fn ctrl_s_submits() {
        let mut t = make_app();
        type_str(&mut t.app, "Hello");
        handle_key(&mut t.app, ctrl('s'));
        assert!(t.app.form().state().is_loading());
        let event = t.events.recv_timeout(Duration::from_secs(5)).unwrap();
        t.app.on_event(event);
        assert!(!t.app.form().state().is_loading());
        assert!(t.app.form().state().is_result_visible());
    }

    #[test]
    fn ctrl_o_opens_prompt_and_esc_closes() {
        let mut t = make_app();
        handle_key(&mut t.app, ctrl('o'));
        assert_eq!(t.app.focus(), Focus::FilePrompt);
        type_str(&mut t.app, "/tmp");
        assert_eq!(t.app.file_prompt(), Some("/tmp"));
        assert_eq!(t.app.form().state().text_input, "");
        handle_key(&mut t.app, press(KeyCode::Esc));
        assert_eq!(t.app.focus(), Focus::Form);
    }

    #[test]
    fn alert_blocks_input_until_dismissed() {
        let mut t = make_app();
        t.app.form_mut().on_summary_finished(
            1,
            Err(crate::api::SummarizeError::Server {
                status: 400,
                message: "Text too short to summarize".into(),
            }),
        );
        type_str(&mut t.app, "ignored");
        assert_eq!(t.app.form().state().text_input, "");

        handle_key(&mut t.app, press(KeyCode::Enter));
        assert!(!t.app.form().state().has_alert());
        type_str(&mut t.app, "ok");
        assert_eq!(t.app.form().state().text_input, "ok");
    }

    #[test]
    fn ctrl_q_quits_even_with_alert() {
        let mut t = make_app();
        t.app.form_mut().on_summary_finished(
            1,
            Err(crate::api::SummarizeError::Server {
                status: 500,
                message: "Internal summarization error".into(),
            }),
        );
        handle_key(&mut t.app, ctrl('q'));
        assert!(t.app.should_quit());
    }
}
