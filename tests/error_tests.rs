// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use themob::error::AppError;
use themob::models::TripError;

#[test]
fn test_error_codes() {
    let err = AppError::InsufficientPoints {
        needed: 300,
        available: 120,
    };
    assert_eq!(err.code(), "insufficient_points");
    assert_eq!(err.to_string(), "Insufficient points: need 300, have 120");

    let err = AppError::RewardExpired("1".to_string());
    assert_eq!(err.code(), "reward_expired");

    let err: AppError = TripError::EndBeforeStart.into();
    assert_eq!(err.code(), "bad_request");
}

#[test]
fn test_status_mapping() {
    let cases = [
        (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (AppError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (
            AppError::InsufficientPoints {
                needed: 2,
                available: 1,
            },
            StatusCode::CONFLICT,
        ),
        (AppError::RewardExpired("r".to_string()), StatusCode::GONE),
        (
            AppError::Internal(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}

#[test]
fn test_only_internal_errors_are_retryable() {
    assert!(AppError::Internal(anyhow::anyhow!("store unavailable")).is_retryable());
    assert!(!AppError::RewardExpired("r".to_string()).is_retryable());
    assert!(!AppError::BadRequest("bad".to_string()).is_retryable());
}
