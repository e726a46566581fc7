// src/ui/widgets/input.rs
use crate::app::{App, AppState, StatusMessage};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the input box widget.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.state == AppState::Scanning {
        "Target URL (Enter rescans)"
    } else {
        "Target URL"
    };
    let input_block = Block::default().borders(Borders::ALL).title(title);
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // The input is always editable, so the cursor is always shown.
    let cursor_x = area.x + (app.input.chars().count() as u16).min(area.width.saturating_sub(3)) + 1;
    frame.set_cursor_position((cursor_x, area.y + 1));
}

/// Renders the one-line status message under the input box.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(StatusMessage::Error(msg)) => Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red)),
            Span::styled(msg.as_str(), Style::default().fg(Color::Red)),
        ]),
        Some(StatusMessage::Info(msg)) => Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(msg.as_str()),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}
