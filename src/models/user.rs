// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and running sustainability totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{TransportType, TripMetrics};

/// User profile as the app displays it.
///
/// `points` counts every point ever earned and never decreases. Redeemed
/// points are tracked separately in `points_spent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub points: u64,
    #[serde(default)]
    pub points_spent: u64,
    pub transport_preferences: BTreeSet<TransportType>,
    /// kg of CO₂ avoided
    pub co2_saved: f64,
    /// kcal
    pub calories_burned: f64,
    /// R$
    pub money_saved: f64,
    pub created_at: DateTime<Utc>,
    pub is_anonymous: bool,
}

impl User {
    /// Points that can still be spent on rewards.
    pub fn available_points(&self) -> u64 {
        self.points.saturating_sub(self.points_spent)
    }

    /// Fold a completed trip into the running totals.
    pub fn apply_trip(&mut self, metrics: &TripMetrics) {
        self.points += metrics.points_earned;
        self.co2_saved += metrics.co2_saved.max(0.0);
        self.calories_burned += metrics.calories_burned.max(0.0);
        self.money_saved += metrics.money_saved.max(0.0);
    }

    pub fn award(&mut self, points: u64) {
        self.points += points;
    }

    /// Deduct `cost` from the spendable balance.
    ///
    /// Returns `false` and leaves the user untouched when the balance is short.
    pub fn spend(&mut self, cost: u64) -> bool {
        if self.available_points() < cost {
            return false;
        }
        self.points_spent += cost;
        true
    }

    pub fn totals(&self) -> UserTotals {
        UserTotals {
            points: self.points,
            available_points: self.available_points(),
            co2_saved: self.co2_saved,
            calories_burned: self.calories_burned,
            money_saved: self.money_saved,
        }
    }
}

/// Aggregate figures returned after a trip completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTotals {
    pub points: u64,
    pub available_points: u64,
    pub co2_saved: f64,
    pub calories_burned: f64,
    pub money_saved: f64,
}
