// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip completion.
//!
//! Turns a finished tracking session into a scored [`Trip`] and folds it
//! into the user's totals and statistics in one repository call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::db::{Repository, TripCompletion};
use crate::error::Result;
use crate::models::trip::validate_span;
use crate::models::{GeoPoint, TransportType, Trip, TripError};

/// Client payload for `POST /api/trips`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTripRequest {
    /// Client-generated trip ID, used for idempotency
    #[validate(length(min = 1, max = 128))]
    pub id: String,
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub transport_type: TransportType,
    pub start_location: GeoPoint,
    pub end_location: GeoPoint,
    /// Distance in meters
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub distance: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub route: Vec<GeoPoint>,
}

impl CompleteTripRequest {
    /// Build the scored trip record.
    pub fn into_trip(self) -> std::result::Result<Trip, TripError> {
        validate_span(
            self.start_time,
            self.end_time,
            self.distance,
            self.start_location,
            self.end_location,
            &self.route,
        )?;

        let duration = (self.end_time - self.start_time).num_seconds().max(0) as u64;
        let metrics = self.transport_type.profile().metrics_for(self.distance);

        Ok(Trip {
            id: self.id,
            user_id: self.user_id,
            transport_type: self.transport_type,
            start_location: self.start_location,
            end_location: self.end_location,
            distance: self.distance,
            duration,
            start_time: self.start_time,
            end_time: self.end_time,
            points_earned: metrics.points_earned,
            co2_saved: metrics.co2_saved,
            calories_burned: metrics.calories_burned,
            money_saved: metrics.money_saved,
            route: self.route,
        })
    }
}

/// Scores trips and persists them.
#[derive(Clone)]
pub struct TripService {
    repo: Arc<dyn Repository>,
}

impl TripService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Complete a trip. Re-submitting the same trip ID is a no-op that
    /// returns the stored trip.
    pub fn complete(
        &self,
        request: CompleteTripRequest,
        now: DateTime<Utc>,
    ) -> Result<TripCompletion> {
        request.validate()?;
        let trip = request.into_trip()?;

        tracing::info!(
            trip_id = %trip.id,
            user_id = %trip.user_id,
            transport = %trip.transport_type,
            distance_m = trip.distance,
            points = trip.points_earned,
            "Completing trip"
        );

        let completion = self.repo.complete_trip_atomic(&trip, now)?;
        if !completion.was_new {
            tracing::debug!(trip_id = %trip.id, "Trip already processed, skipping");
        }
        Ok(completion)
    }
}
