//! Common test utilities

use scano_client::config::{parse_base_url, ClientConfig};
use scano_client::ReportClient;
use std::time::Duration;

/// Creates a client pointing at a wiremock server
pub fn test_client(base: &str) -> ReportClient {
    test_client_with_timeout(base, Duration::from_secs(10))
}

pub fn test_client_with_timeout(base: &str, timeout: Duration) -> ReportClient {
    let config = ClientConfig {
        base_url: parse_base_url(base).expect("mock server uri is a valid base"),
        timeout,
    };
    ReportClient::new(config).expect("Failed to create client")
}
