// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentational view models.
//!
//! Each builder is a pure function from domain records and an explicit
//! [`Theme`] to render-ready data.

pub mod challenge_card;
pub mod points_badge;
pub mod post_card;
pub mod reward_card;
pub mod stats_card;
pub mod theme;
pub mod transport_selector;

pub use challenge_card::{challenge_card, ChallengeCard};
pub use points_badge::{format_thousands, points_badge, PointsBadge};
pub use post_card::{post_card, relative_time, PostCard};
pub use reward_card::{reward_card, RewardCard};
pub use stats_card::{stats_card, ChangeIndicator, StatsCard};
pub use theme::{ColorScheme, Theme};
pub use transport_selector::{transport_label, transport_selector, TransportOption};

use chrono::{DateTime, Utc};

/// Calendar date as shown on cards, e.g. "Dec 31, 2024".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Turn a snake_case tag into words: "public_transport" → "public transport".
pub fn humanize_tag(tag: &str) -> String {
    tag.replace('_', " ")
}
