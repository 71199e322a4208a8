// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Partner businesses, their rewards and redemptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::GeoPoint;

/// Category a reward is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum RewardCategory {
    Food,
    Retail,
    Entertainment,
    Services,
    Transportation,
    Other,
}

impl RewardCategory {
    pub const ALL: [RewardCategory; 6] = [
        RewardCategory::Food,
        RewardCategory::Retail,
        RewardCategory::Entertainment,
        RewardCategory::Services,
        RewardCategory::Transportation,
        RewardCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardCategory::Food => "food",
            RewardCategory::Retail => "retail",
            RewardCategory::Entertainment => "entertainment",
            RewardCategory::Services => "services",
            RewardCategory::Transportation => "transportation",
            RewardCategory::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Category of a partner business. Distinct from [`RewardCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCategory {
    Restaurant,
    Cafe,
    Retail,
    Service,
    Entertainment,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub cover_image_url: Option<String>,
    pub address: String,
    pub location: GeoPoint,
    pub category: BusinessCategory,
    pub contact_info: ContactInfo,
    pub is_partner: bool,
    pub partner_since: Option<DateTime<Utc>>,
}

impl Business {
    /// `partner_since` must be set exactly when the business is a partner.
    pub fn is_consistent(&self) -> bool {
        self.is_partner == self.partner_since.is_some()
    }
}

/// A points-redeemable offer issued by a partner business.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub business_id: String,
    pub business: Option<Business>,
    pub title: String,
    pub description: String,
    pub points_cost: u64,
    /// e.g. "20% off", "Buy 1 Get 1 Free"
    pub discount: String,
    pub valid_until: DateTime<Utc>,
    pub image_url: Option<String>,
    pub category: RewardCategory,
    pub terms_and_conditions: String,
}

impl Reward {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.valid_until
    }
}

/// Record of a reward being redeemed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub code: String,
    pub user_id: String,
    pub reward_id: String,
    pub points_spent: u64,
    pub redeemed_at: DateTime<Utc>,
    pub idempotency_key: String,
}
