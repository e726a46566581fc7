// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.state {
        AppState::Scanning => Line::from(vec![
            Span::raw("Scanning... "),
            key("Enter"),
            Span::raw(" rescan, "),
            key("Ctrl+P"),
            Span::raw(" PDF, "),
            key("Esc"),
            Span::raw(" quit"),
        ]),
        AppState::Idle => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to scan, "),
            key("Ctrl+P"),
            Span::raw(" for the PDF report, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        AppState::Finished | AppState::Failed => Line::from(vec![
            key("Enter"),
            Span::raw(" rescan, "),
            key("Tab"),
            Span::raw(" panel, "),
            key("↑↓"),
            Span::raw(" scroll, "),
            key("Ctrl+P"),
            Span::raw(" PDF, "),
            key("Ctrl+N"),
            Span::raw(" new, "),
            key("Esc"),
            Span::raw(" quit"),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
