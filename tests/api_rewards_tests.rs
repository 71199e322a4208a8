// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward listing and redemption tests.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use themob::config::Config;
use themob::db::seed;
use tower::ServiceExt;

mod common;

/// App with one reward that is still valid.
fn app_with_live_reward(id: &str, cost: u64) -> axum::Router {
    let (app, _state, db) = common::create_test_app_with_db(Config::test_default());
    let mut reward = seed::rewards().remove(1);
    reward.id = id.to_string();
    reward.points_cost = cost;
    reward.valid_until = Utc::now() + Duration::days(30);
    db.insert_reward(reward);
    app
}

fn redeem(reward_id: &str, user_id: &str, key: &str) -> axum::http::Request<axum::body::Body> {
    common::post_json(
        &format!("/api/rewards/{}/redeem", reward_id),
        json!({ "userId": user_id, "idempotencyKey": key }),
    )
}

#[tokio::test]
async fn test_rewards_filtered_by_category() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/api/rewards?category=food"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "3"]);

    let response = app
        .clone()
        .oneshot(common::get("/api/rewards"))
        .await
        .unwrap();
    assert_eq!(common::body_json(response).await.as_array().unwrap().len(), 3);

    let response = app
        .oneshot(common::get("/api/rewards?category=spaceships"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_redeem_deducts_and_replays() {
    let app = app_with_live_reward("live", 300);

    let response = app
        .clone()
        .oneshot(redeem("live", "user2", "key-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = common::body_json(response).await;
    assert_eq!(first["pointsSpent"], 300);
    assert_eq!(first["remainingPoints"], 550);

    let response = app
        .clone()
        .oneshot(redeem("live", "user2", "key-1"))
        .await
        .unwrap();
    let replay = common::body_json(response).await;
    assert_eq!(replay["code"], first["code"]);
    assert_eq!(replay["remainingPoints"], 550);

    let response = app.oneshot(common::get("/api/users/user2")).await.unwrap();
    let user = common::body_json(response).await;
    assert_eq!(user["points"], 850);
    assert_eq!(user["pointsSpent"], 300);
}

#[tokio::test]
async fn test_redeem_failures() {
    let app = app_with_live_reward("pricey", 5000);

    let response = app
        .clone()
        .oneshot(redeem("pricey", "user2", "k"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        common::body_json(response).await["error"],
        "insufficient_points"
    );

    // Seeded rewards ran out at the end of 2024.
    let response = app
        .clone()
        .oneshot(redeem("1", "user1", "k"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GONE);
    assert_eq!(common::body_json(response).await["error"], "reward_expired");

    let response = app
        .clone()
        .oneshot(redeem("missing", "user1", "k"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(redeem("pricey", "user2", "")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_challenges_listing() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/api/challenges"))
        .await
        .unwrap();
    assert_eq!(common::body_json(response).await.as_array().unwrap().len(), 3);

    // Every seeded challenge ended in 2023.
    let response = app
        .oneshot(common::get("/api/challenges?in_progress=true"))
        .await
        .unwrap();
    assert!(common::body_json(response).await.as_array().unwrap().is_empty());
}
