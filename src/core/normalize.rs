// src/core/normalize.rs

//! Folds every response shape the Scano backend has shipped into the
//! canonical [`ScanReport`].
//!
//! Backends in the wild disagree on field names and shapes (`csp` vs
//! `csp_status` vs `csp_analysis`, `infrastructure` as a record or a bare CDN
//! string, `days_remaining` as a number or as `"-"`). All of that variance is
//! absorbed here so the presenter only ever deals with one schema. Individual
//! fields are decoded defensively: anything unusable becomes `None` rather
//! than failing the whole report.

use crate::core::models::{
    CspAnalysis, DnsReport, HeaderCheck, Infrastructure, ResolverResult, ScanReport, TlsInfo,
};
use crate::error::{Result, ScanError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Strings the backend uses to mean "no value".
const PLACEHOLDERS: &[&str] = &["", "-", "--", "n/a"];

/// Keys that have carried the CSP evaluation, newest first.
const CSP_KEYS: &[&str] = &["csp_analysis", "csp", "csp_status"];

/// Converts a decoded JSON document into a [`ScanReport`].
///
/// # Arguments
/// * `value` - The response body, already parsed as JSON.
/// * `received_at` - Timestamp stamped onto the report.
///
/// # Returns
/// The canonical report, or `ScanError::MalformedResponse` when the document
/// is not a JSON object at all.
pub fn normalize(value: Value, received_at: DateTime<Utc>) -> Result<ScanReport> {
    let root = match value {
        Value::Object(map) => map,
        other => {
            warn!(kind = json_kind(&other), "Scan response is not a JSON object.");
            return Err(ScanError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    let report = ScanReport {
        target: text(root.get("target")),
        score: integer(root.get("score")).map(|n| n.clamp(0, 100) as u8),
        tls: root.get("tls").and_then(tls_info),
        headers: header_checks(root.get("headers")),
        csp: csp_analysis(&root),
        dns: root.get("dns").and_then(dns_report),
        infrastructure: infrastructure(&root),
        recommendations: entries(root.get("recommendations")),
        received_at,
    };

    debug!(
        scan_target = report.target.as_deref().unwrap_or("-"),
        score = ?report.score,
        headers = report.headers.len(),
        recommendations = report.recommendations.len(),
        "Normalized scan report."
    );
    Ok(report)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Display text for a scalar, with placeholders mapped to `None`.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            if PLACEHOLDERS.iter().any(|p| trimmed.eq_ignore_ascii_case(p)) {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

/// Truthiness as the browser client judged header values.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn strings(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(|item| text(Some(item))).collect(),
        Some(single @ Value::String(_)) => text(Some(single)).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Every entry of a displayed list, one per element. Only trimmed; an entry
/// that holds a placeholder still counts as a row.
fn entries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(entry).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![entry(single)],
    }
}

fn entry(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn tls_info(value: &Value) -> Option<TlsInfo> {
    let obj = value.as_object()?;
    let info = TlsInfo {
        issuer: text(obj.get("issuer")),
        valid_from: text(obj.get("valid_from")),
        valid_to: text(obj.get("valid_to")),
        days_remaining: integer(obj.get("days_remaining")),
        tls_version: text(obj.get("tls_version")),
    };
    (info != TlsInfo::default()).then_some(info)
}

fn header_checks(value: Option<&Value>) -> Vec<HeaderCheck> {
    let Some(Value::Object(obj)) = value else {
        return Vec::new();
    };
    obj.iter()
        .map(|(name, v)| HeaderCheck {
            name: name.clone(),
            present: truthy(v),
        })
        .collect()
}

fn csp_analysis(root: &Map<String, Value>) -> Option<CspAnalysis> {
    for key in CSP_KEYS {
        match root.get(*key) {
            Some(Value::Object(obj)) => {
                debug!(key, "CSP analysis found as record.");
                return Some(CspAnalysis {
                    status: text(obj.get("status")),
                    issues: entries(obj.get("issues")),
                });
            }
            Some(status @ Value::String(_)) => {
                if let Some(status) = text(Some(status)) {
                    debug!(key, "CSP analysis found as bare status.");
                    return Some(CspAnalysis {
                        status: Some(status),
                        issues: Vec::new(),
                    });
                }
            }
            _ => {}
        }
    }
    None
}

fn dns_report(value: &Value) -> Option<DnsReport> {
    let obj = value.as_object()?;
    let results = match obj.get("results") {
        Some(Value::Array(items)) => items.iter().map(resolver_result).collect(),
        _ => Vec::new(),
    };
    Some(DnsReport {
        domain: text(obj.get("domain")),
        resolved_ip: text(obj.get("resolved_ip")),
        results,
    })
}

fn resolver_result(value: &Value) -> ResolverResult {
    let Some(obj) = value.as_object() else {
        debug!(kind = json_kind(value), "DNS result is not a record.");
        return ResolverResult::default();
    };
    ResolverResult {
        resolver: text(obj.get("resolver")).or_else(|| text(obj.get("name"))),
        location: location(obj),
        provider: text(obj.get("provider")),
        ips: strings(obj.get("ips")),
    }
}

/// A location is either a ready-made string or a city/country pair, nested or
/// flattened into the resolver record.
fn location(obj: &Map<String, Value>) -> Option<String> {
    let parts = match obj.get("location") {
        Some(Value::Object(loc)) => (text(loc.get("city")), text(loc.get("country"))),
        Some(other) => return text(Some(other)),
        None => (text(obj.get("city")), text(obj.get("country"))),
    };
    match parts {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(one), None) | (None, Some(one)) => Some(one),
        (None, None) => None,
    }
}

fn infrastructure(root: &Map<String, Value>) -> Option<Infrastructure> {
    let infra = match root.get("infrastructure") {
        Some(Value::Object(obj)) => Infrastructure {
            server: text(obj.get("server")),
            cdn: text(obj.get("cdn")),
            hosting_provider: text(obj.get("hosting_provider")),
            waf: text(obj.get("waf")),
        },
        Some(bare @ Value::String(_)) => Infrastructure {
            cdn: text(Some(bare)),
            ..Default::default()
        },
        _ => Infrastructure {
            cdn: text(root.get("cdn")),
            ..Default::default()
        },
    };
    (!infra.is_empty()).then_some(infra)
}
