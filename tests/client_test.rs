//! Integration tests for the report client against a mocked backend

mod common;

use common::{test_client, test_client_with_timeout};
use scano_client::core::presenter::{present, Grade, HeaderStatus, PanelBody, NO_DNS_DATA};
use scano_client::ScanError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_successful_scan_renders_every_panel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"url": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "target": "example.com",
            "score": 82,
            "tls": {"issuer": "Let's Encrypt", "tls_version": "TLS 1.3", "days_remaining": 45},
            "headers": {"Strict-Transport-Security": true, "X-Frame-Options": false},
            "recommendations": ["Add X-Frame-Options header"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let report = client.scan("example.com").await.expect("Scan failed");
    let view = present(&report);

    assert_eq!(view.hero.score, "82");
    assert_eq!(view.hero.grade, Some(Grade::Ok));

    let PanelBody::Fields(tls) = &view.tls else {
        panic!("expected TLS fields, got {:?}", view.tls);
    };
    let value = |label: &str| {
        tls.iter()
            .find(|f| f.label == label)
            .map(|f| f.value.clone())
            .expect("label present")
    };
    assert_eq!(value("Issuer"), "Let's Encrypt");
    assert_eq!(value("Version"), "TLS 1.3");
    assert_eq!(value("Expires (days)"), "45");

    let PanelBody::Headers(rows) = &view.headers else {
        panic!("expected header rows");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.iter().filter(|r| r.status == HeaderStatus::Present).count(), 1);
    assert_eq!(rows.iter().filter(|r| r.status == HeaderStatus::Missing).count(), 1);

    assert_eq!(
        view.recommendations,
        PanelBody::Items(vec!["Add X-Frame-Options header".to_string()])
    );
}

#[tokio::test]
async fn test_input_is_trimmed_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .and(body_json(json!({"url": "https://example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"target": "https://example.com"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = test_client(&mock_server.uri())
        .scan("  https://example.com \n")
        .await
        .expect("Scan failed");
    assert_eq!(report.target.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_empty_input_never_reaches_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .scan("")
        .await
        .expect_err("empty input must be rejected");
    assert!(err.is_input_error());
    assert!(matches!(err, ScanError::EmptyTarget));

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "no request should have been issued");
}

#[tokio::test]
async fn test_server_error_is_scan_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .scan("example.com")
        .await
        .expect_err("HTTP 500 must fail");
    assert!(matches!(err, ScanError::Status(status) if status.as_u16() == 500));
    assert!(!err.is_input_error());
}

#[tokio::test]
async fn test_empty_dns_results_render_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "target": "example.com",
            "score": 40,
            "dns": {"domain": "example.com", "resolved_ip": null, "results": []}
        })))
        .mount(&mock_server)
        .await;

    let report = test_client(&mock_server.uri())
        .scan("example.com")
        .await
        .expect("Scan failed");
    let view = present(&report);
    assert_eq!(view.hero.grade, Some(Grade::Bad));
    assert!(matches!(&view.dns, PanelBody::Notice { text, .. } if text == NO_DNS_DATA));
}

#[tokio::test]
async fn test_legacy_payload_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "target": "https://legacy.example",
            "score": 60,
            "headers": {"content-security-policy": false},
            "csp_analysis": {"status": "Weak", "issues": ["No CSP header"]},
            "tls": {"issuer": "-", "valid_from": "-", "valid_to": "-", "days_remaining": "-", "tls_version": "Not Enabled"},
            "cdn": "Cloudflare",
            "recommendations": []
        })))
        .mount(&mock_server)
        .await;

    let report = test_client(&mock_server.uri())
        .scan("legacy.example")
        .await
        .expect("Scan failed");
    let view = present(&report);

    assert_eq!(
        view.csp,
        PanelBody::Csp {
            status: "Weak".to_string(),
            issues: vec!["No CSP header".to_string()],
        }
    );
    let PanelBody::Fields(infra) = &view.infrastructure else {
        panic!("expected infrastructure fields");
    };
    assert!(infra.iter().any(|f| f.label == "CDN" && f.value == "Cloudflare"));
    assert!(infra.iter().any(|f| f.label == "Server" && f.value == "-"));
    assert!(matches!(view.recommendations, PanelBody::Notice { .. }));
}

#[tokio::test]
async fn test_malformed_body_is_scan_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .scan("example.com")
        .await
        .expect_err("HTML body must fail");
    assert!(matches!(err, ScanError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_non_object_json_is_scan_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "a", "report"])))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .scan("example.com")
        .await
        .expect_err("array body must fail");
    assert!(matches!(err, ScanError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"target": "example.com"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client_with_timeout(&mock_server.uri(), Duration::from_millis(300));
    let err = client
        .scan("example.com")
        .await
        .expect_err("delayed response must time out");
    assert!(matches!(err, ScanError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Nothing listens on port 9 (discard) on a test machine.
    let client = test_client_with_timeout("http://127.0.0.1:9", Duration::from_secs(5));
    let err = client
        .scan("example.com")
        .await
        .expect_err("connection must fail");
    assert!(matches!(err, ScanError::Transport(_) | ScanError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_pdf_url_points_at_backend() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    let url = client.pdf_url("example.com/path?q=1").expect("pdf url");
    assert!(url.as_str().starts_with(&format!("{}/api/scan/pdf?url=", mock_server.uri())));
    assert_eq!(
        url.query_pairs().find(|(k, _)| k == "url").map(|(_, v)| v.into_owned()),
        Some("example.com/path?q=1".to_string())
    );
}
