// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transport modes and the per-mode metrics used to score trips.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Mode of travel a user logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Walking,
    Cycling,
    Bus,
    Carpool,
    Car,
    Motorcycle,
    Other,
}

impl TransportType {
    pub const ALL: [TransportType; 7] = [
        TransportType::Walking,
        TransportType::Cycling,
        TransportType::Bus,
        TransportType::Carpool,
        TransportType::Car,
        TransportType::Motorcycle,
        TransportType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Walking => "walking",
            TransportType::Cycling => "cycling",
            TransportType::Bus => "bus",
            TransportType::Carpool => "carpool",
            TransportType::Car => "car",
            TransportType::Motorcycle => "motorcycle",
            TransportType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Scoring profile for this mode.
    pub fn profile(&self) -> TransportProfile {
        match self {
            TransportType::Walking => TransportProfile {
                points_per_km: 15.0,
                co2_saved_kg_per_km: CAR_CO2_KG_PER_KM,
                kcal_per_km: 55.0,
                money_saved_per_km: CAR_COST_PER_KM,
            },
            TransportType::Cycling => TransportProfile {
                points_per_km: 10.0,
                co2_saved_kg_per_km: CAR_CO2_KG_PER_KM,
                kcal_per_km: 30.0,
                money_saved_per_km: CAR_COST_PER_KM,
            },
            TransportType::Bus => TransportProfile {
                points_per_km: 5.0,
                co2_saved_kg_per_km: CAR_CO2_KG_PER_KM - 0.105,
                kcal_per_km: 0.0,
                money_saved_per_km: CAR_COST_PER_KM - 0.35,
            },
            TransportType::Carpool => TransportProfile {
                points_per_km: 3.0,
                co2_saved_kg_per_km: CAR_CO2_KG_PER_KM / 2.0,
                kcal_per_km: 0.0,
                money_saved_per_km: CAR_COST_PER_KM / 2.0,
            },
            TransportType::Car | TransportType::Motorcycle | TransportType::Other => {
                TransportProfile::default()
            }
        }
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average emissions of a private car (kg CO₂ per km), the baseline for savings.
const CAR_CO2_KG_PER_KM: f64 = 0.192;
/// Average fuel and upkeep cost of a private car per km (R$).
const CAR_COST_PER_KM: f64 = 0.85;

/// Per-kilometre rates a transport mode earns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransportProfile {
    pub points_per_km: f64,
    pub co2_saved_kg_per_km: f64,
    pub kcal_per_km: f64,
    pub money_saved_per_km: f64,
}

/// Metrics derived from a trip's distance and mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripMetrics {
    pub points_earned: u64,
    pub co2_saved: f64,
    pub calories_burned: f64,
    pub money_saved: f64,
}

impl TransportProfile {
    pub fn metrics_for(&self, distance_meters: f64) -> TripMetrics {
        let km = (distance_meters.max(0.0)) / 1000.0;
        TripMetrics {
            points_earned: (km * self.points_per_km).floor() as u64,
            co2_saved: km * self.co2_saved_kg_per_km,
            calories_burned: km * self.kcal_per_km,
            money_saved: km * self.money_saved_per_km,
        }
    }
}
