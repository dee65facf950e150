//! Rendering for the summary form.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::SummaryResponse;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK,
};

use super::state::{FormState, LoadingIndicator, ResultCard};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CURSOR: &str = "▏";

/// Height of the file + summary type box (two lines plus borders).
const SELECTION_HEIGHT: u16 = 4;

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState) {
    let mut constraints = vec![Constraint::Length(SELECTION_HEIGHT), Constraint::Min(5)];
    if state.is_loading() {
        constraints.push(Constraint::Length(1));
    }
    if state.is_result_visible() {
        constraints.push(Constraint::Percentage(50));
    }
    let chunks = Layout::vertical(constraints).split(area);

    render_selection(frame, chunks[0], state);
    render_text_input(frame, chunks[1], state);

    let mut next = 2;
    if let LoadingIndicator::Visible { animation_tick } = state.loading {
        render_loading(frame, chunks[next], animation_tick);
        next += 1;
    }
    if let ResultCard::Visible { response, scroll } = &state.result_card {
        render_result_card(frame, chunks[next], response, *scroll);
    }
}

fn render_selection(frame: &mut Frame, area: Rect, state: &FormState) {
    let label_style = Style::default().fg(HEADER_SEPARATOR);
    let text_style = Style::default().fg(HEADER_TEXT);

    let file_line = match &state.file_input {
        Some(file) => Line::from(vec![
            Span::styled("  File: ", label_style),
            Span::styled(file.name.clone(), text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  (Ctrl+X clear)", label_style),
        ]),
        None => Line::from(vec![
            Span::styled("  File: ", label_style),
            Span::styled("none", text_style),
            Span::styled("  (Ctrl+O select)", label_style),
        ]),
    };

    let mut type_spans = vec![Span::styled("  Summary type: ", label_style)];
    for (idx, summary_type) in state.summary_types.iter().enumerate() {
        let style = if idx == state.selected_type {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        type_spans.push(Span::styled(format!(" {} ", summary_type), style));
        type_spans.push(Span::raw(" "));
    }
    type_spans.push(Span::styled(" (Tab)", label_style));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let paragraph = Paragraph::new(vec![file_line, Line::from(type_spans)]).block(block);
    frame.render_widget(paragraph, area);
}

fn render_text_input(frame: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .title(Span::styled(" Text ", Style::default().fg(ACCENT)))
        .title_top(
            Line::from(format!(" {} ", state.char_count_label()))
                .style(Style::default().fg(HEADER_SEPARATOR))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);

    let mut with_cursor = state.text_input.clone();
    with_cursor.push_str(CURSOR);
    let mut rows = wrap_text(&with_cursor, inner.width);
    let offset = rows.len().saturating_sub(inner.height as usize);
    let cursor_row = rows.pop().unwrap_or_default();

    let mut lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    let before_cursor = cursor_row.strip_suffix(CURSOR).unwrap_or(&cursor_row);
    lines.push(Line::from(vec![
        Span::raw(before_cursor.to_string()),
        Span::styled(CURSOR, Style::default().fg(ACCENT)),
    ]));

    // Keep the cursor row in view once the text outgrows the box
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .scroll((offset.min(u16::MAX as usize) as u16, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
        Span::styled("Summarizing...", Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_result_card(frame: &mut Frame, area: Rect, response: &SummaryResponse, scroll: u16) {
    let mut block = Block::default()
        .title(Span::styled(" Summary ", Style::default().fg(ACCENT)))
        .title_top(
            Line::from(" Ctrl+Y copy │ PgUp/PgDn scroll ")
                .style(Style::default().fg(HEADER_SEPARATOR))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_OK));
    if let Some(meta) = summary_meta(response) {
        block = block.title_bottom(
            Line::from(format!(" {} ", meta))
                .style(Style::default().fg(HEADER_SEPARATOR))
                .right_aligned(),
        );
    }
    let inner = block.inner(area);

    let rows = wrap_text(&response.summary, inner.width);
    let scroll = scroll.min(rows.len().saturating_sub(1).min(u16::MAX as usize) as u16);

    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// One rendered line per `\n`-separated line of the summary.
pub fn summary_lines(summary: &str) -> Vec<Line<'static>> {
    summary
        .split('\n')
        .map(|line| Line::from(line.trim_end_matches('\r').to_string()))
        .collect()
}

/// Server metadata line, e.g. `"medium · 1204 → 210 chars"`.
pub fn summary_meta(response: &SummaryResponse) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(summary_type) = &response.summary_type {
        parts.push(summary_type.clone());
    }
    match (response.original_length, response.summary_length) {
        (Some(original), Some(summary)) => {
            parts.push(format!("{} → {} chars", original, summary));
        }
        (None, Some(summary)) => parts.push(format!("{} chars", summary)),
        (Some(original), None) => parts.push(format!("from {} chars", original)),
        (None, None) => {}
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

/// Hard-wrap `text` into rows of at most `width` chars.
///
/// Every `\n` starts a new row and a trailing `\r` is dropped. Widgets
/// render these rows without `Wrap`, so the row count here is exactly what
/// appears on screen (wide glyphs aside, which count as one column).
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.trim_end_matches('\r').chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Rows `text` occupies when wrapped by [`wrap_text`].
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len().min(u16::MAX as usize) as u16
}
