//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use pv_yield_sim::api::{AppState, router};
use pv_yield_sim::config::ScenarioConfig;
use pv_yield_sim::sim::engine::simulate_with_diagnostics;

/// Run the east/west strings preset and return the API state.
fn build_api_state() -> Arc<AppState> {
    let config = ScenarioConfig::east_west_strings().to_system_config();
    let run = simulate_with_diagnostics(&config);
    Arc::new(AppState::from_run(config, run))
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(build_api_state());
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn full_scenario_state_endpoint() {
    let (status, json) = get("/state").await;
    assert_eq!(status, StatusCode::OK);

    // Verify config fields
    assert_eq!(json["config"]["polarity"], "negative");
    assert_eq!(json["config"]["side1"]["orientation"], 270.0);
    assert_eq!(json["config"]["side1"]["strings"], 2);
    assert_eq!(json["config"]["window"]["start"], "2024-01-01");
    assert_eq!(json["config"]["window"]["years"], 2);

    // Verify summary fields
    assert_eq!(json["summary"]["samples"], 70_080);
    assert!(json["summary"]["total_kwh"].as_f64().unwrap() < 0.0);
    assert!(json["summary"]["side1_kwh"].as_f64().unwrap() > 0.0);
    assert_eq!(json["summary"]["clipped_samples"], 0);
    assert!(json["summary"]["best_day"]["energy_kwh"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn full_scenario_series_range() {
    let (status, json) = get("/series?from=96&to=191").await;
    assert_eq!(status, StatusCode::OK);

    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 96);
    assert_eq!(records[0]["index"], 96);
    assert_eq!(records[0]["timestamp"], "2024-01-02 00:00");
    assert_eq!(records[95]["timestamp"], "2024-01-02 23:45");
    assert!(records.iter().all(|r| r["power_kw"].as_f64().unwrap() <= 0.0));
}

#[tokio::test]
async fn series_range_past_the_end_is_truncated() {
    let (status, json) = get("/series?from=70070").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(10));
}

#[tokio::test]
async fn inverted_range_is_rejected() {
    let (status, json) = get("/series?from=20&to=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("must be <="));
}

#[tokio::test]
async fn daily_totals_cover_both_years() {
    let (status, json) = get("/daily").await;
    assert_eq!(status, StatusCode::OK);

    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 730);
    assert_eq!(days[0]["date"], "2024-01-01");
    assert_eq!(days[729]["date"], "2025-12-30");
}
