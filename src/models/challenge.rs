// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-bounded challenges and earned achievements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points_reward: u64,
    /// Qualifying action, e.g. a transport type name
    pub required_action: String,
    pub required_count: u32,
    /// Length in days
    pub duration: u32,
    pub image_url: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub participants: u32,
}

impl Challenge {
    /// Listed as in progress until its end date passes.
    pub fn is_in_progress(&self, now: DateTime<Utc>) -> bool {
        self.end_date > now
    }

    /// Strictly within the challenge window.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now < self.end_date
    }
}
