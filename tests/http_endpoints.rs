// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use arris_exporter::{
    AppState, HealthResponse, MetricsRegistry, ModemClient, PageLayout, create_router,
    run_scrape_cycle,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_state() -> Arc<AppState> {
    Arc::new(AppState {
        metrics: MetricsRegistry::new(),
    })
}

async fn get_body(state: Arc<AppState>, uri: &str) -> (StatusCode, String, String) {
    let app = create_router(state);
    let resp = app
        .oneshot(Request::get(uri).body(String::new()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let ct = resp
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, ct, body)
}

async fn scrape_fixtures(state: &AppState) {
    let server = MockServer::start().await;
    for (page, body) in [
        ("/RgSwInfo.asp", include_str!("fixtures/RgSwInfo.html")),
        ("/RgConnect.asp", include_str!("fixtures/RgConnect.html")),
    ] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }
    let client =
        ModemClient::with_layout(server.uri(), Duration::from_secs(5), &PageLayout::TG3482G)
            .unwrap();
    assert!(run_scrape_cycle(&client, &state.metrics).await);
}

// --- /metrics endpoint ---

#[tokio::test]
async fn metrics_returns_200_with_openmetrics_content_type() {
    let (status, ct, _) = get_body(make_state(), "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        ct.contains("openmetrics-text"),
        "Expected OpenMetrics content-type, got: {ct}"
    );
}

#[tokio::test]
async fn metrics_before_first_scrape_has_only_exporter_metrics() {
    let (_, _, body) = get_body(make_state(), "/metrics").await;

    assert!(body.contains("arris_modem_scrape_success_total"));
    assert!(body.contains("arris_modem_scrape_last_success_timestamp_seconds"));
    assert!(!body.contains("arris_modem_uptime"));
    assert!(!body.contains("arris_modem_downstream_channel_power"));
}

#[tokio::test]
async fn metrics_contains_modem_data_after_scrape() {
    let state = make_state();
    scrape_fixtures(&state).await;

    let (_, _, body) = get_body(state, "/metrics").await;

    assert!(body.contains("arris_modem_uptime 435723"));
    assert!(body.contains("model=\"TG3482G\""));
    assert!(body.contains("hardware_version=\"7\""));
    assert!(body.contains("arris_modem_boot_status{type=\"acquire_downstream_channel\"} 1"));
    assert!(body.contains(
        "arris_modem_downstream_channel_power{channel=\"1\",status=\"Locked\",modulation=\"256QAM\",channel_id=\"9\",frequency=\"555000000 Hz\"} 5.1"
    ));
    assert!(body.contains("arris_modem_downstream_channel_snr{channel=\"1\""));
    assert!(body.contains("arris_modem_downstream_channel_corrected{channel=\"1\""));
    assert!(body.contains("arris_modem_downstream_channel_uncorrectable{channel=\"1\""));
    assert!(body.contains(
        "arris_modem_upstream_channel_power{channel=\"1\",status=\"Locked\",type=\"ATDMA\",channel_id=\"2\",symbol_rate=\"5120 kSym/s\",frequency=\"30600000 Hz\"} 44.5"
    ));
    assert!(body.contains("arris_modem_scrape_success_total 1"));
}

// --- /health endpoint ---

#[tokio::test]
async fn health_reports_no_snapshot_before_first_scrape() {
    let (status, _, body) = get_body(make_state(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert!(!health.snapshot_available);
}

#[tokio::test]
async fn health_reports_snapshot_after_scrape() {
    let state = make_state();
    scrape_fixtures(&state).await;

    let (status, _, body) = get_body(state, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert!(health.snapshot_available);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (status, _, _) = get_body(make_state(), "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
