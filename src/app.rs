// src/app.rs

use crate::core::client::validate_target;
use crate::core::models::ScanReport;
use crate::core::presenter::{present, PanelKind, ReportView};
use crate::error::ScanError;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};
use url::Url;

pub const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Scanning,
    Finished,
    Failed,
}

/// One-line feedback shown under the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Issued for every scan that passes input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTicket {
    pub id: u64,
    pub target: String,
}

/// What a scan task sends back to the event loop.
#[derive(Debug)]
pub struct ScanOutcome {
    pub id: u64,
    pub result: Result<ScanReport, ScanError>,
}

/// All UI state lives here and is only mutated from the event loop.
///
/// Every scan gets a monotonically increasing id; only the outcome carrying
/// the latest id may touch the displayed report. The view is always replaced
/// as a whole, never patched.
pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub view: ReportView,
    pub report: Option<ScanReport>,
    pub status: Option<StatusMessage>,
    pub focus: PanelKind,
    pub scroll_offset: u16,
    pub spinner_frame: usize,
    latest_scan: u64,
    scanning_target: Option<String>,
    in_flight: Option<AbortHandle>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl App {
    pub fn new(input: String) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input,
            view: ReportView::idle(),
            report: None,
            status: None,
            focus: PanelKind::Tls,
            scroll_offset: 0,
            spinner_frame: 0,
            latest_scan: 0,
            scanning_target: None,
            in_flight: None,
        }
    }

    /// Starts a scan of the current input.
    ///
    /// Empty input sets an input-error status and returns `None` without
    /// touching the panels. Otherwise every panel is reset to loading before
    /// the ticket is handed out, so a stale report can never sit next to the
    /// new target.
    pub fn begin_scan(&mut self) -> Option<ScanTicket> {
        let target = match validate_target(&self.input) {
            Ok(target) => target.to_string(),
            Err(e) => {
                self.status = Some(StatusMessage::Error(e.to_string()));
                return None;
            }
        };

        if self.state == AppState::Scanning {
            info!(superseded = self.latest_scan, "New scan supersedes the one in flight.");
        }
        self.latest_scan += 1;
        self.state = AppState::Scanning;
        self.report = None;
        self.view = ReportView::loading(&target);
        self.status = None;
        self.scroll_offset = 0;
        self.spinner_frame = 0;
        self.scanning_target = Some(target.clone());

        debug!(id = self.latest_scan, scan_target = %target, "Scan ticket issued.");
        Some(ScanTicket {
            id: self.latest_scan,
            target,
        })
    }

    /// Remembers the task running the latest scan and aborts the one it replaces.
    pub fn track_in_flight(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.in_flight.replace(handle) {
            if !previous.is_finished() {
                debug!("Aborting superseded scan task.");
                previous.abort();
            }
        }
    }

    pub fn is_latest(&self, id: u64) -> bool {
        id == self.latest_scan
    }

    /// Applies a finished scan. Returns `false` when the outcome belongs to a
    /// superseded request and was discarded.
    pub fn complete_scan(&mut self, outcome: ScanOutcome) -> bool {
        if !self.is_latest(outcome.id) {
            warn!(id = outcome.id, latest = self.latest_scan, "Discarding stale scan outcome.");
            return false;
        }
        self.in_flight = None;
        let target = self.scanning_target.take().unwrap_or_default();

        match outcome.result {
            Ok(report) => {
                info!(id = outcome.id, score = ?report.score, "Scan finished.");
                self.view = present(&report);
                self.report = Some(report);
                self.state = AppState::Finished;
                self.status = None;
            }
            Err(e) => {
                warn!(id = outcome.id, error = %e, "Scan failed.");
                let reason = e.to_string();
                self.view = ReportView::failure(&target, &reason);
                self.report = None;
                self.state = AppState::Failed;
                self.status = Some(StatusMessage::Error(reason));
            }
        }
        self.scroll_offset = 0;
        true
    }

    /// Validates the input for the PDF action. The PDF view does not take
    /// part in the scan lifecycle, so nothing else changes.
    pub fn request_pdf(&mut self) -> Option<String> {
        match validate_target(&self.input) {
            Ok(target) => Some(target.to_string()),
            Err(_) => {
                self.status = Some(StatusMessage::Error("Enter a URL first".to_string()));
                None
            }
        }
    }

    pub fn pdf_opened(&mut self, result: Result<Url, ScanError>) {
        self.status = Some(match result {
            Ok(url) => StatusMessage::Info(format!("Opened PDF report: {url}")),
            Err(e) => StatusMessage::Error(e.to_string()),
        });
    }

    pub fn on_tick(&mut self) {
        if self.state == AppState::Scanning {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_CHARS[self.spinner_frame % SPINNER_CHARS.len()]
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.clear_input_error();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    fn clear_input_error(&mut self) {
        if matches!(self.status, Some(StatusMessage::Error(_))) && self.state != AppState::Failed {
            self.status = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.scroll_offset = 0;
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let rows = self.view.panel(self.focus).row_count() as u16;
        if self.scroll_offset < rows.saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn quit(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.should_quit = true;
    }

    /// Back to the pristine state. Any scan in flight becomes stale.
    pub fn reset(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.latest_scan += 1;
        self.state = AppState::Idle;
        self.input.clear();
        self.view = ReportView::idle();
        self.report = None;
        self.status = None;
        self.focus = PanelKind::Tls;
        self.scroll_offset = 0;
        self.scanning_target = None;
    }
}
