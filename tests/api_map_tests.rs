// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map element query tests.

use axum::http::StatusCode;
use themob::config::Config;
use themob::services::MapRendererKind;
use tower::ServiceExt;

mod common;

fn element_ids(json: &serde_json::Value) -> Vec<String> {
    let mut ids: Vec<String> = json["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn test_all_layers_by_default() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/map/elements"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(element_ids(&common::body_json(response).await).len(), 7);
}

#[tokio::test]
async fn test_bbox_and_filters() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get(
            "/api/map/elements?bbox=-42.7955,-5.0865,-42.7915,-5.0840",
        ))
        .await
        .unwrap();
    let ids = element_ids(&common::body_json(response).await);
    assert!(ids.contains(&"business1".to_string()));
    assert!(ids.contains(&"business2".to_string()));
    assert!(!ids.contains(&"report1".to_string()));

    let response = app
        .oneshot(common::get("/api/map/elements?filters=reports"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert!(json["elements"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["type"] == "report_hotspot"));
}

#[tokio::test]
async fn test_rejects_bad_bbox_and_filter() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/api/map/elements?bbox=1,2,3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(common::get("/api/map/elements?filters=ufo"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_geojson_layers() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/map/elements?format=geojson"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["kind"], "layers");
    assert_eq!(json["layers"]["type"], "FeatureCollection");
    let features = json["layers"]["features"].as_array().unwrap();
    assert_eq!(features.len(), 7);
    assert_eq!(features[0]["geometry"]["type"], "LineString");
}

#[tokio::test]
async fn test_unsupported_renderer_returns_placeholder() {
    let config = Config {
        map_renderer: MapRendererKind::Unsupported,
        ..Config::test_default()
    };
    let (app, _state, _db) = common::create_test_app_with_db(config);

    let response = app.clone().oneshot(common::get("/health")).await.unwrap();
    assert_eq!(common::body_json(response).await["map_renderer"], "unsupported");

    let response = app
        .oneshot(common::get("/api/map/elements?format=geojson"))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["kind"], "placeholder");
    assert!(json["message"].as_str().unwrap().contains("mobile"));
}
