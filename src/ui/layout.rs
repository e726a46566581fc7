// src/ui/layout.rs

use crate::core::presenter::PanelKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Holding the `Rect`s in one struct keeps widgets from recomputing the
/// split every time they draw.
pub struct AppLayout {
    pub input: Rect,
    pub status: Rect,
    pub hero: Rect,
    pub panels: Vec<(PanelKind, Rect)>,
    pub footer: Rect,
}

impl AppLayout {
    pub fn panel(&self, kind: PanelKind) -> Rect {
        self.panels
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }
}

/// Creates the complete application layout.
///
/// Top to bottom: input box, status line, score banner, two rows of report
/// panels, footer. The upper row holds TLS, headers and CSP; the lower row
/// gives DNS the most width because it is the only table.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);

    let upper = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    AppLayout {
        input: main_chunks[0],
        status: main_chunks[1],
        hero: main_chunks[2],
        panels: vec![
            (PanelKind::Tls, upper[0]),
            (PanelKind::Headers, upper[1]),
            (PanelKind::Csp, upper[2]),
            (PanelKind::Dns, lower[0]),
            (PanelKind::Infrastructure, lower[1]),
            (PanelKind::Recommendations, lower[2]),
        ],
        footer: main_chunks[4],
    }
}
