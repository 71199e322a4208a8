// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report and trip submission tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

fn trip_body(id: &str, distance: f64) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "user2",
        "transportType": "cycling",
        "startLocation": { "latitude": -5.0891, "longitude": -42.8019 },
        "endLocation": { "latitude": -5.0901, "longitude": -42.7985 },
        "distance": distance,
        "startTime": "2024-04-10T07:00:00Z",
        "endTime": "2024-04-10T07:20:00Z",
    })
}

#[tokio::test]
async fn test_report_created_pending_and_rewarded() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/reports",
            json!({
                "userId": "user2",
                "mediaUrl": "file:///tmp/pothole.jpg",
                "reportType": "infrastructure",
                "description": "  Buraco na ciclovia  ",
                "location": { "latitude": -5.0892, "longitude": -42.8016 },
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["pointsAwarded"], 10);
    assert_eq!(json["points"], 860);
    assert!(!json["postId"].as_str().unwrap().is_empty());

    let response = app.oneshot(common::get("/api/users/user2")).await.unwrap();
    let user = common::body_json(response).await;
    assert_eq!(user["points"], 860);
}

#[tokio::test]
async fn test_report_validation_failures() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/reports",
            json!({
                "userId": "user2",
                "mediaUrl": "",
                "reportType": "traffic",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "validation_failed");

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/reports",
            json!({
                "userId": "user2",
                "mediaUrl": "file:///tmp/a.jpg",
                "reportType": "traffic",
                "location": { "latitude": 123.0, "longitude": 0.0 },
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(common::post_json(
            "/api/reports",
            json!({
                "userId": "nobody",
                "mediaUrl": "file:///tmp/a.jpg",
                "reportType": "traffic",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trip_completion_is_idempotent() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json("/api/trips", trip_body("trip-a", 5000.0)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = common::body_json(response).await;
    assert_eq!(first["alreadyProcessed"], false);
    assert_eq!(first["trip"]["duration"], 1200);
    let earned = first["trip"]["pointsEarned"].as_u64().unwrap();
    assert!(earned > 0);
    assert_eq!(first["user"]["points"].as_u64().unwrap(), 850 + earned);
    assert_eq!(first["totals"]["points"], first["user"]["points"]);
    assert_eq!(first["totals"]["availablePoints"], first["user"]["points"]);

    let response = app
        .oneshot(common::post_json("/api/trips", trip_body("trip-a", 5000.0)))
        .await
        .unwrap();
    let second = common::body_json(response).await;
    assert_eq!(second["alreadyProcessed"], true);
    assert_eq!(second["user"]["points"], first["user"]["points"]);
    assert_eq!(second["totals"], first["totals"]);
}

#[tokio::test]
async fn test_trip_rejects_negative_distance_and_reversed_times() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json("/api/trips", trip_body("trip-b", -1.0)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = trip_body("trip-c", 100.0);
    body["endTime"] = json!("2024-04-10T06:00:00Z");
    let response = app
        .oneshot(common::post_json("/api/trips", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
