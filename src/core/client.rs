// src/core/client.rs

use crate::config::ClientConfig;
use crate::core::models::ScanReport;
use crate::core::normalize::normalize;
use crate::error::{Result, ScanError};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use tracing::{debug, error, info, warn};
use url::Url;

const SCAN_PATH: &str = "api/scan";
const PDF_PATH: &str = "api/scan/pdf";
const USER_AGENT: &str = concat!("ScanoClient/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct ScanRequest<'a> {
    url: &'a str,
}

/// Checks the user's input before anything touches the network.
///
/// # Returns
/// The trimmed target, or `ScanError::EmptyTarget` for blank input.
pub fn validate_target(input: &str) -> Result<&str> {
    let target = input.trim();
    if target.is_empty() {
        debug!("Rejected empty scan target.");
        return Err(ScanError::EmptyTarget);
    }
    Ok(target)
}

/// Talks to the Scano backend: one POST per scan, no retries, no caching.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ReportClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client.");
                ScanError::Transport(e)
            })?;
        Ok(Self { http, config })
    }

    /// Requests a scan of `input` and decodes the report.
    ///
    /// Non-2xx statuses, network errors, timeouts and bodies that are not a
    /// JSON object all come back as errors; the caller renders them as a
    /// single failure state.
    pub async fn scan(&self, input: &str) -> Result<ScanReport> {
        let target = validate_target(input)?;
        let endpoint = self.config.endpoint(SCAN_PATH)?;
        info!(scan_target = target, endpoint = %endpoint, "Requesting scan.");

        let response = self
            .http
            .post(endpoint)
            .json(&ScanRequest { url: target })
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(scan_target = target, status = %status, "Scan backend returned an error status.");
            return Err(ScanError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(scan_target = target, error = %e, "Scan response is not valid JSON.");
            ScanError::MalformedResponse(e.to_string())
        })?;

        let report = normalize(value, Utc::now())?;
        info!(scan_target = target, score = ?report.score, "Scan report received.");
        Ok(report)
    }

    /// URL of the PDF rendition of a scan of `input`.
    pub fn pdf_url(&self, input: &str) -> Result<Url> {
        let target = validate_target(input)?;
        let mut url = self.config.endpoint(PDF_PATH)?;
        url.query_pairs_mut().append_pair("url", target);
        Ok(url)
    }

    /// Hands the PDF report URL to the system browser.
    ///
    /// Only launches the opener; the backend's answer is the browser's
    /// business. Returns the URL that was opened.
    pub fn open_pdf(&self, input: &str) -> Result<Url> {
        let url = self.pdf_url(input)?;
        info!(url = %url, "Opening PDF report in browser.");
        open_in_browser(&url).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to launch browser.");
            ScanError::Browser(e)
        })?;
        Ok(url)
    }

    fn request_error(&self, e: reqwest::Error) -> ScanError {
        if e.is_timeout() {
            warn!(timeout_secs = self.config.timeout.as_secs(), "Scan request timed out.");
            ScanError::Timeout(self.config.timeout)
        } else {
            warn!(error = %e, "Scan request failed.");
            ScanError::Transport(e)
        }
    }
}

/// Spawns the platform's URL opener. The caller does not block on it; the
/// child is waited on from a detached thread.
pub fn open_in_browser(url: &Url) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url.as_str());
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url.as_str()]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url.as_str());
        c
    };

    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    reap(child);
    Ok(())
}

fn reap(mut child: Child) -> thread::JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!(%status, "URL opener exited.");
            Some(status)
        }
        Err(e) => {
            warn!(error = %e, "Failed to wait on URL opener.");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_base_url;

    fn client(base: &str) -> ReportClient {
        ReportClient::new(ClientConfig {
            base_url: parse_base_url(base).expect("valid base"),
            ..ClientConfig::default()
        })
        .expect("client builds")
    }

    #[cfg(unix)]
    #[test]
    fn test_opener_child_is_reaped() {
        let child = Command::new("true").spawn().expect("spawn true");
        let status = reap(child)
            .join()
            .expect("reaper thread")
            .expect("wait succeeds");
        assert!(status.success());
    }

    #[test]
    fn test_validate_target_trims_and_rejects_blank() {
        assert_eq!(validate_target("  example.com \n").expect("valid"), "example.com");
        assert!(matches!(validate_target(""), Err(ScanError::EmptyTarget)));
        assert!(matches!(validate_target("   \t"), Err(ScanError::EmptyTarget)));
    }

    #[test]
    fn test_pdf_url_encodes_target() {
        let url = client("https://scan.example.org")
            .pdf_url("https://shop.example.com/a b?x=1&y=2")
            .expect("pdf url");
        assert_eq!(url.path(), "/api/scan/pdf");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![("url".to_string(), "https://shop.example.com/a b?x=1&y=2".to_string())]
        );
        assert!(!url.as_str().contains("&y=2"));
    }

    #[test]
    fn test_pdf_url_behind_proxy_prefix() {
        let url = client("https://tools.example.org/scano/")
            .pdf_url("example.com")
            .expect("pdf url");
        assert_eq!(
            url.as_str(),
            "https://tools.example.org/scano/api/scan/pdf?url=example.com"
        );
    }

    #[test]
    fn test_pdf_requires_input() {
        let err = client("http://127.0.0.1:8000").open_pdf(" ").unwrap_err();
        assert!(err.is_input_error());
    }
}
