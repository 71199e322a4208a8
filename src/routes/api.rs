// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API routes backing the mobile screens.

use crate::components::{post_card, PostCard};
use crate::db::PostCursor;
use crate::error::{AppError, Result};
use crate::models::{
    BoundingBox, Challenge, MapElement, Post, ReportStatus, Reward, RewardCategory, Trip, User,
    UserTotals,
};
use crate::services::{CompleteTripRequest, MapRendering, RedeemRequest, ReportSubmission};
use crate::views::{MapFilterSet, RewardsFilter, StatisticsScreen, StatisticsView, TimePeriod};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(get_posts))
        .route("/api/reports", post(submit_report))
        .route("/api/trips", post(complete_trip))
        .route("/api/rewards", get(get_rewards))
        .route("/api/rewards/{id}/redeem", post(redeem_reward))
        .route("/api/challenges", get(get_challenges))
        .route("/api/map/elements", get(get_map_elements))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/stats", get(get_user_stats))
}

// ─── Feed ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PostsQuery {
    /// Cursor for forward pagination (opaque token).
    cursor: Option<String>,
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn default_per_page() -> u32 {
    20
}

const MAX_PER_PAGE: u32 = 100;
const CURSOR_PARTS: usize = 3;

fn parse_cursor(cursor: Option<&str>) -> Result<Option<PostCursor>> {
    cursor
        .map(|raw| {
            let invalid_cursor = || AppError::BadRequest("Invalid 'cursor' parameter".to_string());

            let decoded = URL_SAFE_NO_PAD.decode(raw).map_err(|_| invalid_cursor())?;
            let decoded_str = std::str::from_utf8(&decoded).map_err(|_| invalid_cursor())?;

            // Post IDs may themselves contain ':'.
            let parts: Vec<&str> = decoded_str.splitn(CURSOR_PARTS, ':').collect();
            let [seconds, nanos, post_id] = parts[..] else {
                return Err(invalid_cursor());
            };
            if post_id.is_empty() {
                return Err(invalid_cursor());
            }

            let seconds = seconds.parse::<i64>().map_err(|_| invalid_cursor())?;
            let nanos = nanos.parse::<u32>().map_err(|_| invalid_cursor())?;
            let created_at =
                chrono::DateTime::from_timestamp(seconds, nanos).ok_or_else(invalid_cursor)?;

            Ok(PostCursor {
                created_at,
                post_id: post_id.to_string(),
            })
        })
        .transpose()
}

fn encode_cursor(cursor: &PostCursor) -> String {
    let payload = format!(
        "{}:{}:{}",
        cursor.created_at.timestamp(),
        cursor.created_at.timestamp_subsec_nanos(),
        cursor.post_id
    );
    URL_SAFE_NO_PAD.encode(payload)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub posts: Vec<Post>,
    pub cards: Vec<PostCard>,
    pub per_page: u32,
    pub next_cursor: Option<String>,
}

/// Newest-first community feed.
async fn get_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostsQuery>,
) -> Result<Json<FeedResponse>> {
    if params.per_page == 0 {
        return Err(AppError::BadRequest(
            "per_page must be greater than 0".to_string(),
        ));
    }
    let limit = params.per_page.min(MAX_PER_PAGE);
    let cursor = parse_cursor(params.cursor.as_deref())?;

    tracing::debug!(cursor = ?params.cursor, per_page = limit, "Fetching feed");

    // Fetch one extra item to determine if another page is available.
    let mut posts = state
        .repo
        .list_posts(cursor.as_ref(), limit as usize + 1)?;

    let has_more = posts.len() > limit as usize;
    if has_more {
        posts.truncate(limit as usize);
    }

    let next_cursor = if has_more {
        posts.last().map(|p| {
            encode_cursor(&PostCursor {
                created_at: p.created_at,
                post_id: p.id.clone(),
            })
        })
    } else {
        None
    };

    let now = Utc::now();
    let cards = posts
        .iter()
        .map(|p| post_card(p, &state.theme, now))
        .collect();

    Ok(Json(FeedResponse {
        posts,
        cards,
        per_page: limit,
        next_cursor,
    }))
}

// ─── Reports ─────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub post_id: String,
    pub status: ReportStatus,
    pub points_awarded: u64,
    /// Author's lifetime points after the award
    pub points: u64,
}

async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ReportSubmission>,
) -> Result<(StatusCode, Json<ReportResponse>)> {
    let filed = state.reports.submit(submission, Utc::now())?;

    Ok((
        StatusCode::CREATED,
        Json(ReportResponse {
            status: filed.post.status().unwrap_or(ReportStatus::Pending),
            post_id: filed.post.id,
            points_awarded: filed.points_awarded,
            points: filed.author.points,
        }),
    ))
}

// ─── Trips ───────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub trip: Trip,
    pub user: User,
    pub totals: UserTotals,
    pub already_processed: bool,
}

async fn complete_trip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CompleteTripRequest>,
) -> Result<Json<TripResponse>> {
    let completion = state.trips.complete(request, Utc::now())?;

    Ok(Json(TripResponse {
        totals: completion.user.totals(),
        trip: completion.trip,
        user: completion.user,
        already_processed: !completion.was_new,
    }))
}

// ─── Rewards & Challenges ────────────────────────────────────

#[derive(Deserialize)]
struct RewardsQuery {
    category: Option<String>,
}

async fn get_rewards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RewardsQuery>,
) -> Result<Json<Vec<Reward>>> {
    let category = params
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|raw| {
            RewardCategory::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown reward category: {}", raw)))
        })
        .transpose()?;

    let filter = RewardsFilter::new(category);
    let rewards = state
        .rewards
        .rewards()?
        .into_iter()
        .filter(|r| filter.matches(r))
        .collect();
    Ok(Json(rewards))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RedeemResponse {
    pub code: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_spent: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub remaining_points: u64,
}

async fn redeem_reward(
    State(state): State<Arc<AppState>>,
    Path(reward_id): Path<String>,
    Json(request): Json<RedeemRequest>,
) -> Result<Json<RedeemResponse>> {
    let outcome = state.rewards.redeem(&reward_id, request, Utc::now())?;

    Ok(Json(RedeemResponse {
        remaining_points: outcome.user.available_points(),
        code: outcome.redemption.code,
        points_spent: outcome.redemption.points_spent,
    }))
}

#[derive(Deserialize)]
struct ChallengesQuery {
    #[serde(default)]
    in_progress: bool,
}

async fn get_challenges(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChallengesQuery>,
) -> Result<Json<Vec<Challenge>>> {
    let challenges = state.rewards.challenges(params.in_progress, Utc::now())?;
    Ok(Json(challenges))
}

// ─── Map ─────────────────────────────────────────────────────

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum MapFormat {
    #[default]
    Json,
    Geojson,
}

#[derive(Deserialize)]
struct MapQuery {
    /// `minLon,minLat,maxLon,maxLat`
    bbox: Option<String>,
    /// Comma-separated layers; omitted means every layer
    filters: Option<String>,
    #[serde(default)]
    format: MapFormat,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum MapResponse {
    Elements { elements: Vec<MapElement> },
    Rendered(MapRendering),
}

async fn get_map_elements(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MapQuery>,
) -> Result<Json<MapResponse>> {
    let bounds = params
        .bbox
        .as_deref()
        .map(BoundingBox::parse)
        .transpose()?;
    let filters = match params.filters.as_deref() {
        Some(raw) => MapFilterSet::parse_list(raw)?,
        None => MapFilterSet::default(),
    };

    let elements = state.map.query(bounds.as_ref(), &filters)?;

    Ok(Json(match params.format {
        MapFormat::Json => MapResponse::Elements { elements },
        MapFormat::Geojson => MapResponse::Rendered(state.map.render(&elements, &state.theme)),
    }))
}

// ─── Users ───────────────────────────────────────────────────

fn load_user(state: &AppState, user_id: &str) -> Result<User> {
    state
        .repo
        .get_user(user_id)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    Ok(Json(load_user(&state, &user_id)?))
}

#[derive(Deserialize)]
struct StatsQuery {
    period: Option<String>,
}

async fn get_user_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatisticsView>> {
    let period = match params.period.as_deref() {
        Some(raw) => TimePeriod::parse(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown period: {}", raw)))?,
        None => TimePeriod::default(),
    };

    let user = load_user(&state, &user_id)?;
    let stats = state.repo.get_user_stats(&user_id)?.unwrap_or_default();

    let screen = StatisticsScreen::new(period);
    Ok(Json(screen.view(&user, &stats, &state.theme, Utc::now())))
}
