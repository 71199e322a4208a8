// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed post card.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::theme::{ColorRamp, Theme, NEUTRAL, PRIMARY, SUCCESS, WARNING};
use crate::components::{format_date, humanize_tag};
use crate::models::{Post, ReportStatus};

pub const PLACEHOLDER_AVATAR_URL: &str =
    "https://images.pexels.com/photos/771742/pexels-photo-771742.jpeg";
pub const ANONYMOUS_NAME: &str = "Anonymous User";
/// Every post is geotagged within the one city the app serves.
const LOCATION_LABEL: &str = "Teresina";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: String,
    pub text_color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: String,
    pub author_name: String,
    pub avatar_url: String,
    pub timestamp: String,
    pub location_label: Option<&'static str>,
    pub report_badge: Option<Badge>,
    pub status_badge: Option<Badge>,
    pub content: String,
    pub media_url: Option<String>,
    pub likes: u32,
    pub comments: u32,
    /// Heart is filled once a post has any likes
    pub like_fill: Option<&'static str>,
    pub background: &'static str,
    pub text_color: &'static str,
    pub muted_color: &'static str,
}

/// "Just now", "5m ago", "3h ago", "2d ago", then the calendar date.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }
    format_date(created_at)
}

fn status_ramp(status: ReportStatus) -> ColorRamp {
    match status {
        ReportStatus::Resolved => SUCCESS,
        ReportStatus::Investigating => WARNING,
        ReportStatus::Pending | ReportStatus::Rejected => NEUTRAL,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn status_badge(status: ReportStatus) -> Badge {
    let ramp = status_ramp(status);
    let label = match status {
        ReportStatus::Pending => "pending",
        ReportStatus::Investigating => "investigating",
        ReportStatus::Resolved => "resolved",
        ReportStatus::Rejected => "rejected",
    };
    Badge {
        label: capitalize(label),
        text_color: ramp.at(700),
        background: ramp.at(50),
        border: ramp.at(300),
    }
}

pub fn post_card(post: &Post, theme: &Theme, now: DateTime<Utc>) -> PostCard {
    let report_badge = post.report.map(|r| Badge {
        label: humanize_tag(r.report_type.as_str()),
        text_color: WARNING.at(600),
        background: WARNING.at(50),
        border: WARNING.base(),
    });

    PostCard {
        id: post.id.clone(),
        author_name: post
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
        avatar_url: post
            .user
            .as_ref()
            .and_then(|u| u.avatar_url.clone())
            .unwrap_or_else(|| PLACEHOLDER_AVATAR_URL.to_string()),
        timestamp: relative_time(post.created_at, now),
        location_label: post.location.map(|_| LOCATION_LABEL),
        report_badge,
        status_badge: post.status().map(status_badge),
        content: post.content.clone(),
        media_url: post.media_urls.first().cloned(),
        likes: post.likes,
        comments: post.comments,
        like_fill: (post.likes > 0).then(|| PRIMARY.base()),
        background: theme.card,
        text_color: theme.text,
        muted_color: theme.muted_text(),
    }
}
