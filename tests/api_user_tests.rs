// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and statistics tests.

use axum::http::StatusCode;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(common::get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["map_renderer"], "native");
}

#[tokio::test]
async fn test_user_lookup() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/api/users/user1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["username"], "Maria Silva");
    assert_eq!(json["points"], 1250);

    let response = app
        .oneshot(common::get("/api/users/ghost"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(common::body_json(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_stats_periods() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/api/users/user1/stats"))
        .await
        .unwrap();
    let week = common::body_json(response).await;
    assert_eq!(week["period"], "week");
    assert_eq!(week["series"].as_array().unwrap().len(), 7);
    assert_eq!(week["cards"].as_array().unwrap().len(), 4);
    assert_eq!(week["cards"][0]["value"], "1250");

    let response = app
        .clone()
        .oneshot(common::get("/api/users/user1/stats?period=year"))
        .await
        .unwrap();
    let year = common::body_json(response).await;
    assert_eq!(year["series"].as_array().unwrap().len(), 12);

    let response = app
        .oneshot(common::get("/api/users/user1/stats?period=decade"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
