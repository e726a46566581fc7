// src/ui/widgets/panel.rs

use crate::core::presenter::{DNS_COLUMNS, HeaderStatus, PanelBody, PanelKind, Tone};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Neutral => Style::default().fg(Color::DarkGray),
        Tone::Positive => Style::default().fg(Color::Green),
        Tone::Negative => Style::default().fg(Color::Red),
    }
}

/// Renders one report panel.
///
/// # Arguments
/// * `frame` - The `Frame` used for rendering the UI.
/// * `kind` - Which panel this is; used for the title.
/// * `body` - The presenter's content for the panel.
/// * `focused` - Focused panels get a highlighted border and honor `scroll`.
/// * `scroll` - Number of rows scrolled past.
/// * `area` - The `Rect` defining the drawable area for this widget.
pub fn render_panel(
    frame: &mut Frame,
    kind: PanelKind,
    body: &PanelBody,
    focused: bool,
    scroll: u16,
    area: Rect,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {kind} "))
        .border_style(border_style);
    let scroll = if focused { scroll } else { 0 };

    if let PanelBody::Dns { rows, primary_ip } = body {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let header = Row::new(DNS_COLUMNS.iter().map(|c| Cell::from(*c)))
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table_rows = rows.iter().map(|r| {
            Row::new(vec![
                Cell::from(r.resolver.as_str()),
                Cell::from(r.location.as_str()),
                Cell::from(r.provider.as_str()),
                Cell::from(r.ips.as_str()),
            ])
        });
        let table = Table::new(
            table_rows,
            [
                Constraint::Percentage(18),
                Constraint::Percentage(30),
                Constraint::Percentage(24),
                Constraint::Percentage(28),
            ],
        )
        .header(header);
        let mut state = TableState::default().with_offset(scroll as usize);
        frame.render_stateful_widget(table, chunks[0], &mut state);

        let primary = Line::from(vec![
            "Primary IP: ".bold(),
            Span::raw(primary_ip.as_str()),
        ]);
        frame.render_widget(Paragraph::new(primary), chunks[1]);
        return;
    }

    let lines = body_lines(body);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn body_lines(body: &PanelBody) -> Vec<Line<'_>> {
    match body {
        PanelBody::Notice { text, tone } => {
            vec![Line::from(Span::styled(text.as_str(), tone_style(*tone)))]
        }
        PanelBody::Fields(fields) => {
            let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
            fields
                .iter()
                .map(|f| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:width$}  ", f.label),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(f.value.as_str()),
                    ])
                })
                .collect()
        }
        PanelBody::Headers(rows) => rows
            .iter()
            .map(|row| {
                let (icon, style) = match row.status {
                    HeaderStatus::Present => ("✓", Style::default().fg(Color::Green)),
                    HeaderStatus::Missing => ("✗", Style::default().fg(Color::Red)),
                };
                Line::from(vec![
                    Span::styled(format!("{icon} {} ", row.status), style),
                    Span::raw(row.name.as_str()),
                ])
            })
            .collect(),
        PanelBody::Csp { status, issues } => {
            let mut lines = vec![
                Line::from(vec!["Status: ".bold(), Span::raw(status.as_str())]),
                Line::from(""),
            ];
            if issues.is_empty() {
                lines.push(Line::from(Span::styled(
                    "✓ No CSP issues reported",
                    Style::default().fg(Color::Green),
                )));
            } else {
                lines.extend(issues.iter().map(|issue| {
                    Line::from(vec![
                        Span::styled("• ", Style::default().fg(Color::Yellow)),
                        Span::raw(issue.as_str()),
                    ])
                }));
            }
            lines
        }
        PanelBody::Items(items) => items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Cyan)),
                    Span::raw(item.as_str()),
                ])
            })
            .collect(),
        // Tables are drawn by `render_panel` directly.
        PanelBody::Dns { .. } => Vec::new(),
    }
}
