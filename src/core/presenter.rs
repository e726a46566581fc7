// src/core/presenter.rs

//! Turns a [`ScanReport`] into what the user sees.
//!
//! Everything here is a pure function of its input: no I/O, no clock, no
//! hidden state. The terminal UI and the plain-text printer both consume the
//! [`ReportView`] produced here, so the two can never disagree about what a
//! report says.

use crate::core::models::{ScanReport, TlsInfo};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Scores strictly below this are classified as bad.
pub const SCORE_THRESHOLD: u8 = 50;

pub const PLACEHOLDER: &str = "-";
pub const UNKNOWN: &str = "unknown";
pub const NO_DNS_DATA: &str = "No DNS data available";
pub const NO_ISSUES: &str = "No issues";

/// The report panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum PanelKind {
    #[strum(serialize = "TLS")]
    Tls,
    #[strum(serialize = "Headers")]
    Headers,
    #[strum(serialize = "CSP")]
    Csp,
    #[strum(serialize = "DNS")]
    Dns,
    #[strum(serialize = "Infrastructure")]
    Infrastructure,
    #[strum(serialize = "Recommendations")]
    Recommendations,
}

impl PanelKind {
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Binary classification of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Grade {
    #[strum(serialize = "ok")]
    Ok,
    #[strum(serialize = "bad")]
    Bad,
}

impl Grade {
    pub fn classify(score: u8) -> Self {
        if score < SCORE_THRESHOLD { Grade::Bad } else { Grade::Ok }
    }
}

/// How a notice should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HeaderStatus {
    Present,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            value: value.unwrap_or(PLACEHOLDER).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    pub name: String,
    pub status: HeaderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRow {
    pub resolver: String,
    pub location: String,
    pub provider: String,
    /// Resolved addresses joined for display.
    pub ips: String,
}

pub const DNS_COLUMNS: [&str; 4] = ["Source", "Location", "Provider", "IPs"];

/// Content of one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// A single message instead of data: idle, loading, failed or no data.
    Notice { text: String, tone: Tone },
    Fields(Vec<Field>),
    Headers(Vec<HeaderRow>),
    Csp { status: String, issues: Vec<String> },
    Dns { rows: Vec<DnsRow>, primary_ip: String },
    Items(Vec<String>),
}

impl PanelBody {
    fn notice(text: impl Into<String>, tone: Tone) -> Self {
        PanelBody::Notice {
            text: text.into(),
            tone,
        }
    }

    /// Number of data rows, zero for notices.
    pub fn row_count(&self) -> usize {
        match self {
            PanelBody::Notice { .. } => 0,
            PanelBody::Fields(fields) => fields.len(),
            PanelBody::Headers(rows) => rows.len(),
            PanelBody::Csp { issues, .. } => issues.len(),
            PanelBody::Dns { rows, .. } => rows.len(),
            PanelBody::Items(items) => items.len(),
        }
    }
}

/// Target and score banner at the top of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub target: String,
    /// Display form of the score, `--` when unknown.
    pub score: String,
    pub score_value: Option<u8>,
    pub grade: Option<Grade>,
    pub caption: String,
}

/// Everything the user sees for one report (or one non-report state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub hero: HeroView,
    pub tls: PanelBody,
    pub headers: PanelBody,
    pub csp: PanelBody,
    pub dns: PanelBody,
    pub infrastructure: PanelBody,
    pub recommendations: PanelBody,
}

impl ReportView {
    fn uniform(hero: HeroView, body: PanelBody) -> Self {
        Self {
            hero,
            tls: body.clone(),
            headers: body.clone(),
            csp: body.clone(),
            dns: body.clone(),
            infrastructure: body.clone(),
            recommendations: body,
        }
    }

    /// Before the first scan.
    pub fn idle() -> Self {
        Self::uniform(
            HeroView {
                target: "Ready to Scan".to_string(),
                score: "--".to_string(),
                score_value: None,
                grade: None,
                caption: "Enter a URL to begin security audit".to_string(),
            },
            PanelBody::notice("Waiting for a scan", Tone::Neutral),
        )
    }

    /// While a scan of `target` is in flight. Replaces every panel so nothing
    /// from a previous report lingers next to the new target.
    pub fn loading(target: &str) -> Self {
        Self::uniform(
            HeroView {
                target: target.to_string(),
                score: "--".to_string(),
                score_value: None,
                grade: None,
                caption: "Scanning...".to_string(),
            },
            PanelBody::notice("Loading...", Tone::Neutral),
        )
    }

    /// After a Scan Failure. Every panel reaches a defined no-data state.
    pub fn failure(target: &str, reason: &str) -> Self {
        Self::uniform(
            HeroView {
                target: target.to_string(),
                score: "--".to_string(),
                score_value: None,
                grade: None,
                caption: format!("Scan failed: {reason}"),
            },
            PanelBody::notice("No data: the scan failed", Tone::Negative),
        )
    }

    pub fn panel(&self, kind: PanelKind) -> &PanelBody {
        match kind {
            PanelKind::Tls => &self.tls,
            PanelKind::Headers => &self.headers,
            PanelKind::Csp => &self.csp,
            PanelKind::Dns => &self.dns,
            PanelKind::Infrastructure => &self.infrastructure,
            PanelKind::Recommendations => &self.recommendations,
        }
    }

    pub fn panels(&self) -> impl Iterator<Item = (PanelKind, &PanelBody)> {
        PanelKind::iter().map(move |kind| (kind, self.panel(kind)))
    }
}

/// Maps a report to its view.
pub fn present(report: &ScanReport) -> ReportView {
    ReportView {
        hero: hero(report),
        tls: tls_panel(report.tls.as_ref()),
        headers: headers_panel(report),
        csp: csp_panel(report),
        dns: dns_panel(report),
        infrastructure: infrastructure_panel(report),
        recommendations: recommendations_panel(report),
    }
}

fn hero(report: &ScanReport) -> HeroView {
    HeroView {
        target: report.target.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        score: report
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".to_string()),
        score_value: report.score,
        grade: report.score.map(Grade::classify),
        caption: format!(
            "Scan completed {}",
            report.received_at.format("%Y-%m-%d %H:%M UTC")
        ),
    }
}

fn tls_panel(tls: Option<&TlsInfo>) -> PanelBody {
    let Some(tls) = tls else {
        return PanelBody::notice("No TLS data available", Tone::Neutral);
    };
    let days = tls
        .days_remaining
        .map(|d| d.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    PanelBody::Fields(vec![
        Field::new("Issuer", tls.issuer.as_deref()),
        Field::new("Valid from", tls.valid_from.as_deref()),
        Field::new("Valid to", tls.valid_to.as_deref()),
        Field::new("Expires (days)", Some(days.as_str())),
        Field::new("Version", tls.tls_version.as_deref()),
    ])
}

fn headers_panel(report: &ScanReport) -> PanelBody {
    if report.headers.is_empty() {
        return PanelBody::notice("No header data available", Tone::Neutral);
    }
    PanelBody::Headers(
        report
            .headers
            .iter()
            .map(|h| HeaderRow {
                name: h.name.clone(),
                status: if h.present {
                    HeaderStatus::Present
                } else {
                    HeaderStatus::Missing
                },
            })
            .collect(),
    )
}

fn csp_panel(report: &ScanReport) -> PanelBody {
    match &report.csp {
        Some(csp) => PanelBody::Csp {
            status: csp.status.clone().unwrap_or_else(|| "Unknown".to_string()),
            issues: csp.issues.iter().map(|i| or_placeholder(i)).collect(),
        },
        None => PanelBody::notice("No CSP data available", Tone::Neutral),
    }
}

fn dns_panel(report: &ScanReport) -> PanelBody {
    let Some(dns) = report.dns.as_ref().filter(|d| !d.results.is_empty()) else {
        return PanelBody::notice(NO_DNS_DATA, Tone::Neutral);
    };
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    PanelBody::Dns {
        rows: dns
            .results
            .iter()
            .map(|r| DnsRow {
                resolver: text(&r.resolver),
                location: text(&r.location),
                provider: text(&r.provider),
                ips: if r.ips.is_empty() {
                    PLACEHOLDER.to_string()
                } else {
                    r.ips.join(", ")
                },
            })
            .collect(),
        primary_ip: text(&dns.resolved_ip),
    }
}

fn infrastructure_panel(report: &ScanReport) -> PanelBody {
    let Some(infra) = &report.infrastructure else {
        return PanelBody::notice("No infrastructure data available", Tone::Neutral);
    };
    PanelBody::Fields(vec![
        Field::new("Server", infra.server.as_deref()),
        Field::new("CDN", infra.cdn.as_deref()),
        Field::new("Hosting", infra.hosting_provider.as_deref()),
        Field::new("WAF", infra.waf.as_deref()),
    ])
}

fn recommendations_panel(report: &ScanReport) -> PanelBody {
    if report.recommendations.is_empty() {
        PanelBody::notice(NO_ISSUES, Tone::Positive)
    } else {
        PanelBody::Items(
            report
                .recommendations
                .iter()
                .map(|r| or_placeholder(r))
                .collect(),
        )
    }
}

fn or_placeholder(entry: &str) -> String {
    if entry.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        entry.to_string()
    }
}
