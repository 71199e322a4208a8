// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::theme::{Theme, PRIMARY};
use crate::models::Challenge;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub reward_label: String,
    pub participants_label: String,
    /// Started and not yet ended
    pub is_active: bool,
    pub accent_color: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
}

pub fn challenge_card(challenge: &Challenge, theme: &Theme, now: DateTime<Utc>) -> ChallengeCard {
    ChallengeCard {
        id: challenge.id.clone(),
        title: challenge.title.clone(),
        description: challenge.description.clone(),
        image_url: challenge.image_url.clone(),
        reward_label: format!("{} pts", challenge.points_reward),
        participants_label: format!("{} Participantes", challenge.participants),
        is_active: challenge.is_active(now),
        accent_color: PRIMARY.base(),
        background: theme.card,
        text_color: theme.text,
    }
}
