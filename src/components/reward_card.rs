// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward marketplace card.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::theme::{Theme, NEUTRAL, PRIMARY};
use crate::components::{format_date, humanize_tag};
use crate::models::Reward;

pub const PLACEHOLDER_REWARD_IMAGE_URL: &str =
    "https://images.pexels.com/photos/3769747/pexels-photo-3769747.jpeg";
pub const PLACEHOLDER_LOGO_URL: &str =
    "https://images.pexels.com/photos/2292953/pexels-photo-2292953.jpeg";
pub const UNKNOWN_BUSINESS_NAME: &str = "Local Business";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub points_label: String,
    pub points_badge_color: &'static str,
    pub business_name: String,
    pub business_logo_url: String,
    pub category_label: String,
    pub expiry_label: String,
    pub is_expired: bool,
    pub action_label: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub meta_color: &'static str,
}

pub fn reward_card(reward: &Reward, theme: &Theme, now: DateTime<Utc>) -> RewardCard {
    RewardCard {
        id: reward.id.clone(),
        title: reward.title.clone(),
        description: reward.description.clone(),
        image_url: reward
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_REWARD_IMAGE_URL.to_string()),
        points_label: format!("{} POINTS", reward.points_cost),
        points_badge_color: PRIMARY.at(300),
        business_name: reward
            .business
            .as_ref()
            .map(|b| b.name.clone())
            .unwrap_or_else(|| UNKNOWN_BUSINESS_NAME.to_string()),
        business_logo_url: reward
            .business
            .as_ref()
            .map(|b| b.logo_url.clone())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_LOGO_URL.to_string()),
        category_label: humanize_tag(reward.category.as_str()),
        expiry_label: format!("Expires: {}", format_date(reward.valid_until)),
        is_expired: reward.is_expired(now),
        action_label: "Resgatar",
        background: theme.card,
        text_color: theme.text,
        meta_color: NEUTRAL.at(600),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use chrono::TimeZone;

    #[test]
    fn test_seed_reward_card() {
        let reward = &seed::rewards()[0];
        let before = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let card = reward_card(reward, &Theme::DARK, before);

        assert_eq!(card.points_label, "150 POINTS");
        assert_eq!(card.business_name, "Café Sustentável");
        assert_eq!(card.expiry_label, "Expires: Dec 31, 2024");
        assert_eq!(card.category_label, "food");
        assert!(!card.is_expired);
        assert!(reward_card(reward, &Theme::DARK, reward.valid_until).is_expired);
    }

    #[test]
    fn test_missing_business_and_image() {
        let mut reward = seed::rewards().remove(1);
        reward.business = None;
        reward.image_url = None;
        let card = reward_card(&reward, &Theme::LIGHT, Utc::now());

        assert_eq!(card.business_name, UNKNOWN_BUSINESS_NAME);
        assert_eq!(card.business_logo_url, PLACEHOLDER_LOGO_URL);
        assert_eq!(card.image_url, PLACEHOLDER_REWARD_IMAGE_URL);
        assert_eq!(card.background, "#F9FAFB");
    }
}
