//! Modal popups: the blocking alert and the file path prompt.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::form::wrap_text;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

const ALERT_MAX_WIDTH: u16 = 60;
const PROMPT_WIDTH: u16 = 64;

pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let width = ALERT_MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
    // Borders + one-space left pad
    let text_width = width.saturating_sub(3);
    let rows = wrap_text(message, text_width);
    let height = (rows.len().min(u16::MAX as usize) as u16).saturating_add(4);
    let rect = centered_rect_by_size(area, width, height);

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(format!(" {}", row)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: OK",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .block(block);
    frame.render_widget(widget, rect);
}

pub fn render_file_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let rect = centered_rect_by_size(area, PROMPT_WIDTH, 5);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Path: ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(input.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: Select  Esc: Cancel",
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(" Select File ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
