// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data-access layer.
//!
//! Screens and services talk to a [`Repository`]; [`MemoryDb`] is the
//! in-process implementation, optionally seeded with the demo data set.

pub mod memory;
pub mod seed;

pub use memory::MemoryDb;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{
    BoundingBox, Challenge, MapElement, Post, Redemption, Reward, Trip, User, UserStats,
};

/// Position in the newest-first post feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCursor {
    pub created_at: DateTime<Utc>,
    pub post_id: String,
}

/// Result of folding a trip into a user's totals.
#[derive(Debug, Clone)]
pub struct TripCompletion {
    pub trip: Trip,
    pub user: User,
    /// `false` when the trip ID had already been processed
    pub was_new: bool,
}

/// Result of a redemption request.
#[derive(Debug, Clone)]
pub struct RedemptionOutcome {
    pub redemption: Redemption,
    pub user: User,
    /// `true` when an earlier request with the same idempotency key is replayed
    pub replayed: bool,
}

/// Query and persistence interface behind every screen.
pub trait Repository: Send + Sync {
    // ─── Feed ────────────────────────────────────────────────────

    /// Posts newest first, strictly after `cursor` when given.
    fn list_posts(&self, cursor: Option<&PostCursor>, limit: usize) -> Result<Vec<Post>>;

    /// Store a new report and award `points` to `author_id` in one step.
    ///
    /// The author is passed separately so anonymous reports can hide it.
    fn create_report_atomic(&self, post: Post, author_id: &str, points: u64) -> Result<User>;

    // ─── Rewards & Challenges ────────────────────────────────────

    fn list_rewards(&self) -> Result<Vec<Reward>>;

    fn get_reward(&self, reward_id: &str) -> Result<Option<Reward>>;

    /// Deduct the reward cost and issue a code, at most once per idempotency key.
    fn redeem_atomic(
        &self,
        user_id: &str,
        reward: &Reward,
        idempotency_key: &str,
        now: DateTime<Utc>,
    ) -> Result<RedemptionOutcome>;

    fn list_challenges(&self) -> Result<Vec<Challenge>>;

    // ─── Map ─────────────────────────────────────────────────────

    /// Elements touching `bounds`, or all elements when `bounds` is `None`.
    fn query_map_elements(&self, bounds: Option<&BoundingBox>) -> Result<Vec<MapElement>>;

    // ─── Users & Trips ───────────────────────────────────────────

    fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    fn upsert_user(&self, user: &User) -> Result<()>;

    fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>>;

    /// Store a trip and update the user's totals and stats together.
    fn complete_trip_atomic(&self, trip: &Trip, now: DateTime<Utc>) -> Result<TripCompletion>;
}
