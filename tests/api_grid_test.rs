//! Integration tests for /api/grid, /api/patterns and /health.

mod common;

use axum::http::StatusCode;
use common::{assert_json_error, assert_ok, fixtures, TestApp};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn test_grid_samples_tile_colors() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/grid?columns=10", fixtures::split_png(20, 10))
        .await;

    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["columns"], 10);
    assert_eq!(json["rows"], 5);

    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 5);
    for row in cells {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 10);
        assert_eq!(row[0], "#ffffff");
        assert_eq!(row[4], "#ffffff");
        assert_eq!(row[5], "#000000");
        assert_eq!(row[9], "#000000");
    }
}

#[tokio::test]
async fn test_grid_wide_image_has_one_row() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/grid?columns=10", fixtures::gradient_png(100, 2))
        .await;

    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["rows"], 1);
}

#[tokio::test]
async fn test_grid_validates_parameters() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/grid?columns=100", fixtures::gradient_png(20, 20))
        .await;

    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_grid_rejects_garbage() {
    let app = TestApp::new();

    let response = app.post_bytes("/api/grid", b"GIF89a-nope".to_vec()).await;

    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_patterns_list() {
    let app = TestApp::new();

    let response = app.get("/api/patterns").await;

    assert_ok(&response);
    let json: Value = response.json();
    let patterns = json.as_array().unwrap();
    assert_eq!(patterns.len(), 6);

    assert_eq!(patterns[0]["name"], "static");
    assert_eq!(patterns[0]["animated"], false);
    for pattern in &patterns[1..] {
        assert_eq!(pattern["animated"], true, "{pattern}");
    }

    let names: Vec<&str> = patterns
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"concentric"));
    assert!(names.contains(&"diagonal-tr-bl"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_ok(&response);
    assert_eq!(response.text(), "OK");
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.get("/api/nothing").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
