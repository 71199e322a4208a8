//! User statistics aggregates for the statistics screen.
//!
//! These aggregates are updated once per completed trip, so the statistics
//! screen reads O(1) records instead of replaying every trip.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::models::{TransportType, Trip};

/// Consecutive-day activity streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub best: u32,
    pub last_active: Option<NaiveDate>,
}

impl Streak {
    fn record(&mut self, day: NaiveDate) {
        match self.last_active {
            Some(last) if day == last => {}
            // Late-arriving older trips do not rewrite the streak.
            Some(last) if day < last => {}
            Some(last) if last.succ_opt() == Some(day) => {
                self.current += 1;
                self.last_active = Some(day);
            }
            _ => {
                self.current = 1;
                self.last_active = Some(day);
            }
        }
        self.best = self.best.max(self.current);
    }
}

/// Pre-computed statistics for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    // ─── Totals ──────────────────────────────────────────────────
    #[serde(default)]
    pub total_trips: u32,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub total_distance_meters: f64,
    #[serde(default)]
    pub total_co2_saved: f64,
    #[serde(default)]
    pub total_calories_burned: f64,
    #[serde(default)]
    pub total_money_saved: f64,

    // ─── By Transport Type ───────────────────────────────────────
    /// Points per transport type (for the breakdown chart)
    #[serde(default)]
    pub points_by_transport: BTreeMap<TransportType, u64>,
    #[serde(default)]
    pub trips_by_transport: BTreeMap<TransportType, u32>,
    #[serde(default)]
    pub distance_by_transport: BTreeMap<TransportType, f64>,

    // ─── Time Series ─────────────────────────────────────────────
    /// Points per day ("YYYY-MM-DD")
    #[serde(default)]
    pub points_by_day: BTreeMap<String, u64>,
    /// CO₂ saved per month ("YYYY-MM")
    #[serde(default)]
    pub co2_by_month: BTreeMap<String, f64>,

    #[serde(default)]
    pub streak: Streak,

    // ─── Idempotency ─────────────────────────────────────────────
    /// Trip IDs already folded into these totals
    #[serde(default)]
    pub processed_trip_ids: HashSet<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserStats {
    /// Update stats with a completed trip.
    ///
    /// Returns `true` if the trip was new, `false` if it was already counted.
    pub fn update_from_trip(&mut self, trip: &Trip, now: DateTime<Utc>) -> bool {
        if self.processed_trip_ids.contains(&trip.id) {
            return false;
        }
        self.processed_trip_ids.insert(trip.id.clone());
        self.updated_at = Some(now);

        self.total_trips += 1;
        self.total_points += trip.points_earned;
        self.total_distance_meters += trip.distance;
        self.total_co2_saved += trip.co2_saved;
        self.total_calories_burned += trip.calories_burned;
        self.total_money_saved += trip.money_saved;

        *self
            .points_by_transport
            .entry(trip.transport_type)
            .or_insert(0) += trip.points_earned;
        *self
            .trips_by_transport
            .entry(trip.transport_type)
            .or_insert(0) += 1;
        *self
            .distance_by_transport
            .entry(trip.transport_type)
            .or_insert(0.0) += trip.distance;

        let day = trip.end_time.date_naive();
        *self.points_by_day.entry(day_key(day)).or_insert(0) += trip.points_earned;
        *self.co2_by_month.entry(month_key(day)).or_insert(0.0) += trip.co2_saved;

        self.streak.record(day);
        true
    }
}

/// "YYYY-MM-DD"
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// "YYYY-MM"
pub fn month_key(day: NaiveDate) -> String {
    day.format("%Y-%m").to_string()
}
