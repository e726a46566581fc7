// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use crate::core::presenter::Grade;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Renders the score banner: target on the left, score and gauge on the right.
///
/// The gauge color follows the ok/bad classification only; an unknown score
/// draws an empty gray gauge.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let container = Block::default().borders(Borders::ALL).title("Summary");
    let inner = container.inner(area);
    frame.render_widget(container, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let hero = &app.view.hero;
    let caption = if app.state == AppState::Scanning {
        Line::from(vec![
            Span::styled(format!("{} ", app.spinner()), Style::default().fg(Color::Cyan)),
            Span::raw(hero.caption.as_str()),
        ])
    } else {
        Line::from(hero.caption.as_str()).style(Style::default().fg(Color::DarkGray))
    };
    let target_text = Text::from(vec![Line::from(hero.target.as_str().bold()), caption]);
    frame.render_widget(Paragraph::new(target_text), columns[0]);

    let score_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(columns[1]);

    let (rating, color) = match hero.grade {
        Some(Grade::Ok) => ("ok", Color::Green),
        Some(Grade::Bad) => ("bad", Color::Red),
        None => ("", Color::DarkGray),
    };
    let score_line = if rating.is_empty() {
        Line::from(vec!["Score ".bold(), Span::raw(format!("{}/100", hero.score))])
    } else {
        Line::from(vec![
            "Score ".bold(),
            Span::styled(format!("{}/100 ({})", hero.score, rating), Style::default().fg(color)),
        ])
    };
    frame.render_widget(Paragraph::new(score_line), score_chunks[0]);

    let gauge = Gauge::default()
        .percent(u16::from(hero.score_value.unwrap_or(0)))
        .label("")
        .gauge_style(Style::default().fg(color));
    frame.render_widget(gauge, score_chunks[1]);
}
