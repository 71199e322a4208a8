// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip model and geographic points.

use chrono::{DateTime, Utc};
use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::TransportType;

/// A WGS84 coordinate as sent by the mobile client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(c: Coord<f64>) -> Self {
        GeoPoint::new(c.y, c.x)
    }
}

/// Build a line string (x = longitude) from an ordered point sequence.
pub fn to_line_string(points: &[GeoPoint]) -> LineString<f64> {
    LineString::from(points.iter().copied().map(Coord::from).collect::<Vec<_>>())
}

/// A completed, immutable trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub transport_type: TransportType,
    pub start_location: GeoPoint,
    pub end_location: GeoPoint,
    /// Distance in meters
    pub distance: f64,
    /// Duration in seconds
    pub duration: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub points_earned: u64,
    pub co2_saved: f64,
    pub calories_burned: f64,
    pub money_saved: f64,
    #[serde(default)]
    pub route: Vec<GeoPoint>,
}

/// Reasons a trip record is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripError {
    #[error("end time precedes start time")]
    EndBeforeStart,
    #[error("distance must be a non-negative number")]
    InvalidDistance,
    #[error("coordinates out of range")]
    InvalidLocation,
    #[error("route must start at the start location and end at the end location")]
    RouteEndpointMismatch,
}

impl Trip {
    /// Check the record invariants.
    pub fn validate(&self) -> Result<(), TripError> {
        validate_span(
            self.start_time,
            self.end_time,
            self.distance,
            self.start_location,
            self.end_location,
            &self.route,
        )
    }

    /// Route encoded as a Google polyline (precision 5).
    pub fn route_polyline(&self) -> Option<String> {
        if self.route.is_empty() {
            return None;
        }
        polyline::encode_coordinates(to_line_string(&self.route), 5).ok()
    }
}

pub(crate) fn validate_span(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    distance: f64,
    start_location: GeoPoint,
    end_location: GeoPoint,
    route: &[GeoPoint],
) -> Result<(), TripError> {
    if end_time < start_time {
        return Err(TripError::EndBeforeStart);
    }
    if !distance.is_finite() || distance < 0.0 {
        return Err(TripError::InvalidDistance);
    }
    if !start_location.is_valid()
        || !end_location.is_valid()
        || route.iter().any(|p| !p.is_valid())
    {
        return Err(TripError::InvalidLocation);
    }
    if let (Some(first), Some(last)) = (route.first(), route.last()) {
        if *first != start_location || *last != end_location {
            return Err(TripError::RouteEndpointMismatch);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_trip(route: Vec<GeoPoint>) -> Trip {
        Trip {
            id: "t1".to_string(),
            user_id: "user1".to_string(),
            transport_type: TransportType::Cycling,
            start_location: GeoPoint::new(-5.0830, -42.7990),
            end_location: GeoPoint::new(-5.0860, -42.7920),
            distance: 850.0,
            duration: 300,
            start_time: Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 15, 8, 5, 0).unwrap(),
            points_earned: 8,
            co2_saved: 0.16,
            calories_burned: 25.5,
            money_saved: 0.7,
            route,
        }
    }

    #[test]
    fn test_valid_trip_without_route() {
        assert_eq!(make_trip(vec![]).validate(), Ok(()));
    }

    #[test]
    fn test_route_must_match_endpoints() {
        let trip = make_trip(vec![
            GeoPoint::new(-5.0830, -42.7990),
            GeoPoint::new(-5.0845, -42.7950),
        ]);
        assert_eq!(trip.validate(), Err(TripError::RouteEndpointMismatch));

        let trip = make_trip(vec![
            GeoPoint::new(-5.0830, -42.7990),
            GeoPoint::new(-5.0845, -42.7950),
            GeoPoint::new(-5.0860, -42.7920),
        ]);
        assert_eq!(trip.validate(), Ok(()));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut trip = make_trip(vec![]);
        std::mem::swap(&mut trip.start_time, &mut trip.end_time);
        assert_eq!(trip.validate(), Err(TripError::EndBeforeStart));
    }

    #[test]
    fn test_route_polyline() {
        let trip = make_trip(vec![
            GeoPoint::new(-5.0830, -42.7990),
            GeoPoint::new(-5.0845, -42.7950),
            GeoPoint::new(-5.0860, -42.7920),
        ]);
        assert_eq!(make_trip(vec![]).route_polyline(), None);

        let encoded = trip.route_polyline().unwrap();
        let decoded = polyline::decode_polyline(&encoded, 5).unwrap();
        assert_eq!(decoded.0.len(), 3);
    }
}
