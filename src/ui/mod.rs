// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
pub mod text;
mod widgets;

pub use text::render_text;

/// Draws the whole screen from `app`. Reads state only.
pub fn render(app: &App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::input::render_status(frame, app, layout.status);
    widgets::summary::render_summary(frame, app, layout.hero);

    for (kind, body) in app.view.panels() {
        widgets::panel::render_panel(
            frame,
            kind,
            body,
            kind == app.focus,
            app.scroll_offset,
            layout.panel(kind),
        );
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ScanOutcome;
    use crate::core::models::{DnsReport, HeaderCheck, ScanReport, TlsInfo};
    use crate::error::ScanError;
    use chrono::{DateTime, Utc};
    use ratatui::backend::TestBackend;
    use reqwest::StatusCode;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).expect("test terminal");
        terminal.draw(|frame| render(app, frame)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finished(report: ScanReport) -> App {
        let mut app = App::new(report.target.clone().unwrap_or_default());
        let ticket = app.begin_scan().expect("ticket");
        app.complete_scan(ScanOutcome {
            id: ticket.id,
            result: Ok(report),
        });
        app
    }

    #[test]
    fn test_idle_screen() {
        let screen = draw(&App::default());
        assert!(screen.contains("Ready to Scan"));
        assert!(screen.contains("Waiting for a scan"));
        assert!(screen.contains("Press Enter to scan"));
    }

    #[test]
    fn test_report_screen() {
        let app = finished(ScanReport {
            target: Some("example.com".into()),
            score: Some(82),
            tls: Some(TlsInfo {
                issuer: Some("Let's Encrypt".into()),
                tls_version: Some("TLS 1.3".into()),
                days_remaining: Some(45),
                ..TlsInfo::default()
            }),
            headers: vec![
                HeaderCheck { name: "Strict-Transport-Security".into(), present: true },
                HeaderCheck { name: "X-Frame-Options".into(), present: false },
            ],
            csp: None,
            dns: Some(DnsReport {
                domain: Some("example.com".into()),
                resolved_ip: Some("93.184.216.34".into()),
                results: Vec::new(),
            }),
            infrastructure: None,
            recommendations: vec!["Add X-Frame-Options header".into()],
            received_at: DateTime::<Utc>::UNIX_EPOCH,
        });
        let screen = draw(&app);
        assert!(screen.contains("82/100 (ok)"));
        assert!(screen.contains("Let's Encrypt"));
        assert!(screen.contains("45"));
        assert!(screen.contains("Present Strict-Transport-Security"));
        assert!(screen.contains("Missing X-Frame-Options"));
        assert!(screen.contains("No DNS data available"));
        assert!(!screen.contains("Primary IP"));
        assert!(screen.contains("Add X-Frame-Options header"));
    }

    #[test]
    fn test_failure_screen_has_no_stale_data() {
        let mut app = finished(ScanReport {
            target: Some("example.com".into()),
            score: Some(82),
            tls: Some(TlsInfo {
                issuer: Some("Let's Encrypt".into()),
                ..TlsInfo::default()
            }),
            headers: Vec::new(),
            csp: None,
            dns: None,
            infrastructure: None,
            recommendations: Vec::new(),
            received_at: DateTime::<Utc>::UNIX_EPOCH,
        });
        let ticket = app.begin_scan().expect("ticket");
        app.complete_scan(ScanOutcome {
            id: ticket.id,
            result: Err(ScanError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        });

        let screen = draw(&app);
        assert!(!screen.contains("Let's Encrypt"));
        assert!(!screen.contains("82/100"));
        assert!(screen.contains("No data: the scan failed"));
        assert!(screen.contains("HTTP 500"));
    }

    #[test]
    fn test_same_state_draws_identically() {
        let app = finished(ScanReport {
            target: Some("example.com".into()),
            score: Some(30),
            tls: None,
            headers: Vec::new(),
            csp: None,
            dns: None,
            infrastructure: None,
            recommendations: Vec::new(),
            received_at: DateTime::<Utc>::UNIX_EPOCH,
        });
        assert_eq!(draw(&app), draw(&app));
        assert!(draw(&app).contains("30/100 (bad)"));
    }
}
