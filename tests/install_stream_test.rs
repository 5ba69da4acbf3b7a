//! Integration tests for the streamed install progress protocol.

mod common;

use common::{flags_from, spawn_server};
use installer_mock::sim::SimFlags;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

async fn start_install(base: &str, body: &str) -> (StatusCode, Vec<String>) {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/start-install", base))
        .body(body.to_string())
        .send()
        .await
        .unwrap();

    let status = response.status();
    let text = response.text().await.unwrap();
    let lines = text.lines().map(str::to_string).collect();
    (status, lines)
}

#[tokio::test]
async fn test_full_run_streams_ten_status_lines_in_order() {
    let base = spawn_server(SimFlags::default()).await;

    let (status, lines) = start_install(&base, "path=%2Ftmp%2Ftest%2F").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lines.len(), 10);

    for (i, line) in lines.iter().enumerate() {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        let progress = event["Status"][1].as_f64().unwrap();
        assert_eq!(event["Status"][0], "Processing...");
        assert!((progress - i as f64 / 10.0).abs() < 1e-9, "line {}: {}", i, line);
    }
}

#[tokio::test]
async fn test_first_and_last_lines_carry_exact_fractions() {
    let base = spawn_server(SimFlags::default()).await;

    let (_, lines) = start_install(&base, "").await;
    assert_eq!(lines.first().map(String::as_str), Some(r#"{"Status":["Processing...",0.0]}"#));
    assert_eq!(lines.last().map(String::as_str), Some(r#"{"Status":["Processing...",0.9]}"#));
}

#[tokio::test]
async fn test_error_mode_streams_a_single_error_line() {
    let base = spawn_server(flags_from(&["error"])).await;

    let (status, lines) = start_install(&base, r#"{"path":"/tmp/test/"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lines, vec![r#"{"Error":"Simulated error."}"#.to_string()]);
}

#[tokio::test]
async fn test_concurrent_installs_keep_independent_counters() {
    let base = spawn_server(SimFlags::default()).await;

    let (first, second) = tokio::join!(start_install(&base, "a=1"), start_install(&base, "b=2"));

    assert_eq!(first.1.len(), 10);
    assert_eq!(second.1.len(), 10);
    assert_eq!(first.1, second.1);
}
