use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::popup::{render_alert, render_file_prompt};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.form().state();

    frame.render_widget(Header::new().widget(app.server_url()), header);
    frame.render_widget(Clear, body);
    render_form(frame, body, state);
    frame.render_widget(Footer::new().widget(footer, state.notice.as_ref()), footer);

    if let Some(input) = app.file_prompt() {
        render_file_prompt(frame, body, input);
    }
    // Alert last: it sits above everything, including the file prompt
    if let Some(message) = &state.alert {
        render_alert(frame, body, message);
    }
}
