// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rewards screen: category filter, challenges in progress, reward cards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::{
    challenge_card, points_badge, reward_card, ChallengeCard, PointsBadge, RewardCard, Theme,
};
use crate::models::{Challenge, Reward, RewardCategory, User};

/// "public_transport" → "Public Transport"
pub fn format_category_name(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Challenges whose end date is still ahead.
pub fn challenges_in_progress(challenges: &[Challenge], now: DateTime<Utc>) -> Vec<&Challenge> {
    challenges.iter().filter(|c| c.is_in_progress(now)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChip {
    pub category: Option<RewardCategory>,
    pub label: String,
    pub selected: bool,
}

/// Reward category selection. `None` shows everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardsFilter {
    selected: Option<RewardCategory>,
}

impl RewardsFilter {
    pub fn new(selected: Option<RewardCategory>) -> Self {
        Self { selected }
    }

    pub fn select(&mut self, category: Option<RewardCategory>) {
        self.selected = category;
    }

    pub fn selected(&self) -> Option<RewardCategory> {
        self.selected
    }

    pub fn matches(&self, reward: &Reward) -> bool {
        self.selected.map_or(true, |c| c == reward.category)
    }

    pub fn apply<'a>(&self, rewards: &'a [Reward]) -> Vec<&'a Reward> {
        rewards.iter().filter(|r| self.matches(r)).collect()
    }

    /// "Tudo" followed by one chip per category.
    pub fn chips(&self) -> Vec<CategoryChip> {
        std::iter::once(CategoryChip {
            category: None,
            label: "Tudo".to_string(),
            selected: self.selected.is_none(),
        })
        .chain(RewardCategory::ALL.into_iter().map(|c| CategoryChip {
            category: Some(c),
            label: format_category_name(c.as_str()),
            selected: self.selected == Some(c),
        }))
        .collect()
    }
}

/// Everything the rewards screen draws.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsView {
    pub points: PointsBadge,
    pub challenges: Vec<ChallengeCard>,
    pub categories: Vec<CategoryChip>,
    pub rewards: Vec<RewardCard>,
}

#[derive(Debug, Clone, Default)]
pub struct RewardsScreen {
    filter: RewardsFilter,
}

impl RewardsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> RewardsFilter {
        self.filter
    }

    pub fn select_category(&mut self, category: Option<RewardCategory>) {
        self.filter.select(category);
    }

    pub fn view(
        &self,
        user: &User,
        rewards: &[Reward],
        challenges: &[Challenge],
        theme: &Theme,
        now: DateTime<Utc>,
    ) -> RewardsView {
        RewardsView {
            points: points_badge(user.available_points(), theme),
            challenges: challenges_in_progress(challenges, now)
                .into_iter()
                .map(|c| challenge_card(c, theme, now))
                .collect(),
            categories: self.filter.chips(),
            rewards: self
                .filter
                .apply(rewards)
                .into_iter()
                .map(|r| reward_card(r, theme, now))
                .collect(),
        }
    }
}
