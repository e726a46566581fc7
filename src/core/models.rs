// src/core/models.rs

use chrono::{DateTime, Utc};

// --- Canonical Report Schema ---
// Every sub-record is optional: a plaintext target has no TLS data, an older
// backend sends no CSP analysis, and so on. Legacy payload shapes are folded
// into this schema by `core::normalize` before anything else sees them.

/// Certificate summary for the scanned host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsInfo {
    pub issuer: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    /// `None` means unknown. Zero is a real value (expires today).
    pub days_remaining: Option<i64>,
    pub tls_version: Option<String>,
}

/// One expected security header and whether the target sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCheck {
    pub name: String,
    pub present: bool,
}

/// Content-Security-Policy evaluation as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CspAnalysis {
    /// Enum-like verdict such as "Weak" or "Unknown". Passed through verbatim.
    pub status: Option<String>,
    pub issues: Vec<String>,
}

/// A resolution performed from a single vantage point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverResult {
    pub resolver: Option<String>,
    pub location: Option<String>,
    pub provider: Option<String>,
    pub ips: Vec<String>,
}

/// Multi-vantage-point DNS summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsReport {
    pub domain: Option<String>,
    pub resolved_ip: Option<String>,
    pub results: Vec<ResolverResult>,
}

/// Infrastructure fingerprint. Older backends only report a CDN name, in which
/// case the remaining fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infrastructure {
    pub server: Option<String>,
    pub cdn: Option<String>,
    pub hosting_provider: Option<String>,
    pub waf: Option<String>,
}

impl Infrastructure {
    /// True when the backend supplied nothing usable for any field.
    pub fn is_empty(&self) -> bool {
        self.server.is_none()
            && self.cdn.is_none()
            && self.hosting_provider.is_none()
            && self.waf.is_none()
    }
}

// --- Main Report ---

/// The single immutable value produced per scan request.
///
/// A `ScanReport` is only ever constructed whole by the normalizer, so the
/// presenter never observes a half-populated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub target: Option<String>,
    /// Overall rating, clamped to 0..=100. `None` when the backend omitted it.
    pub score: Option<u8>,
    pub tls: Option<TlsInfo>,
    /// Header checks in the order the backend listed them.
    pub headers: Vec<HeaderCheck>,
    pub csp: Option<CspAnalysis>,
    pub dns: Option<DnsReport>,
    pub infrastructure: Option<Infrastructure>,
    pub recommendations: Vec<String>,
    /// When the client finished decoding the response.
    pub received_at: DateTime<Utc>,
}
