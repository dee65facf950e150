use std::path::PathBuf;

use crate::ui::events::AppEvent;
use crate::ui::form::SummaryFormController;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    FilePrompt,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Path typed into the file prompt popup.
    file_prompt: String,
    server_url: String,
    form: SummaryFormController,
}

impl App {
    pub fn new(form: SummaryFormController, server_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form,
            file_prompt: String::new(),
            server_url: server_url.into(),
            form,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn form(&self) -> &SummaryFormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SummaryFormController {
        &mut self.form
    }

    // ========================================================================
    // File prompt
    // ========================================================================

    /// Text of the file prompt, when it is open.
    pub fn file_prompt(&self) -> Option<&str> {
        match self.focus {
            Focus::FilePrompt => Some(&self.file_prompt),
            Focus::Form => None,
        }
    }

    pub fn open_file_prompt(&mut self) {
        self.file_prompt = self
            .form
            .state()
            .file_input
            .as_ref()
            .map(|f| f.path.display().to_string())
            .unwrap_or_default();
        self.focus = Focus::FilePrompt;
    }

    pub fn close_file_prompt(&mut self) {
        self.file_prompt.clear();
        self.focus = Focus::Form;
    }

    pub fn prompt_insert(&mut self, text: &str) {
        self.file_prompt.push_str(text);
    }

    pub fn prompt_backspace(&mut self) {
        self.file_prompt.pop();
    }

    /// Select the typed path. The prompt stays open if the path is not a file.
    pub fn confirm_file_prompt(&mut self) {
        let raw = self.file_prompt.trim().trim_matches(|c| c == '"' || c == '\'');
        if raw.is_empty() {
            self.close_file_prompt();
            return;
        }
        if self.form.select_file(PathBuf::from(raw)) {
            self.close_file_prompt();
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_paste(&mut self, text: &str) {
        if self.form.state().has_alert() {
            return;
        }
        match self.focus {
            Focus::FilePrompt => self.prompt_insert(text.trim_end_matches(['\r', '\n'])),
            Focus::Form => self.form.insert_str(text),
        }
    }

    pub fn on_tick(&mut self) {
        self.form.on_tick();
    }

    /// Terminal resized. The result card spans the full width inside its
    /// borders, which bounds how far it can scroll.
    pub fn on_resize(&mut self, cols: u16, _rows: u16) {
        self.form.set_result_width(cols.saturating_sub(2));
    }

    /// Route non-key events. Key events go through [`crate::ui::input::handle_key`].
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Tick => self.on_tick(),
            AppEvent::SummaryFinished {
                submission,
                outcome,
            } => self.form.on_summary_finished(submission, outcome),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Key(_) => {}
        }
    }
}
