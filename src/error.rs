// src/error.rs

//! Error types for the Scano client.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong between the user pressing Enter and a report
/// reaching the presenter.
///
/// `EmptyTarget` is an input error and never reaches the network. Every other
/// variant except `InvalidBaseUrl` and `Browser` belongs to the Scan Failure
/// family and is surfaced as a single failure state.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Enter a URL or hostname to scan")]
    EmptyTarget,

    #[error("Invalid backend address: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Request to the scan backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Scan backend answered with HTTP {0}")]
    Status(StatusCode),

    #[error("Scan timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("Malformed scan report: {0}")]
    MalformedResponse(String),

    #[error("Could not open the browser: {0}")]
    Browser(#[from] std::io::Error),
}

impl ScanError {
    /// Input errors are handled locally by prompting the user.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ScanError::EmptyTarget)
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ScanError>;
