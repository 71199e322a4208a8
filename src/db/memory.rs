// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store backed by concurrent maps.
//!
//! Multi-record writes for one user (trip completion, redemption, report
//! rewards) are serialized by a per-user lock so concurrent requests never
//! lose an update.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::db::{seed, PostCursor, RedemptionOutcome, Repository, TripCompletion};
use crate::error::{AppError, Result};
use crate::models::{
    BoundingBox, Challenge, MapElement, Post, Redemption, Reward, Trip, TripMetrics, User,
    UserStats,
};

type UserLocks = DashMap<String, Arc<Mutex<()>>>;

/// In-memory database.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Collections>,
}

#[derive(Default)]
struct Collections {
    users: DashMap<String, User>,
    user_stats: DashMap<String, UserStats>,
    trips: DashMap<String, Trip>,
    posts: DashMap<String, Post>,
    rewards: DashMap<String, Reward>,
    challenges: DashMap<String, Challenge>,
    map_elements: DashMap<String, MapElement>,
    /// Keyed by (user_id, idempotency_key)
    redemptions: DashMap<(String, String), Redemption>,
    user_locks: UserLocks,
}

impl MemoryDb {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo data set.
    pub fn seeded() -> Self {
        let db = Self::new();
        for user in seed::users() {
            db.inner.users.insert(user.id.clone(), user);
        }
        for post in seed::posts() {
            db.insert_post(post);
        }
        for reward in seed::rewards() {
            db.insert_reward(reward);
        }
        for challenge in seed::challenges() {
            db.insert_challenge(challenge);
        }
        for element in seed::map_elements() {
            db.insert_map_element(element);
        }
        tracing::info!(
            users = db.inner.users.len(),
            posts = db.inner.posts.len(),
            rewards = db.inner.rewards.len(),
            challenges = db.inner.challenges.len(),
            map_elements = db.inner.map_elements.len(),
            "Seeded in-memory store"
        );
        db
    }

    pub fn insert_post(&self, post: Post) {
        self.inner.posts.insert(post.id.clone(), post);
    }

    pub fn insert_reward(&self, reward: Reward) {
        self.inner.rewards.insert(reward.id.clone(), reward);
    }

    pub fn insert_challenge(&self, challenge: Challenge) {
        self.inner.challenges.insert(challenge.id.clone(), challenge);
    }

    pub fn insert_map_element(&self, element: MapElement) {
        self.inner.map_elements.insert(element.id.clone(), element);
    }

    pub fn get_trip(&self, trip_id: &str) -> Option<Trip> {
        self.inner.trips.get(trip_id).map(|t| t.clone())
    }

    /// Run `f` while holding the user's write lock.
    fn with_user_lock<T>(&self, user_id: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = self
            .inner
            .user_locks
            .entry(user_id.to_string())
            .or_default()
            .clone();
        let _guard = lock
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("user lock poisoned for {}", user_id)))?;
        f()
    }

    fn require_user(&self, user_id: &str) -> Result<User> {
        self.inner
            .users
            .get(user_id)
            .map(|u| u.clone())
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}

fn sort_key(post: &Post) -> (DateTime<Utc>, &str) {
    (post.created_at, post.id.as_str())
}

/// Human-friendly redemption code, e.g. `TMB-3F9A12C0`.
fn generate_code() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("TMB-{}", raw[..8].to_uppercase())
}

impl Repository for MemoryDb {
    fn list_posts(&self, cursor: Option<&PostCursor>, limit: usize) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .inner
            .posts
            .iter()
            .map(|p| p.value().clone())
            .filter(|p| match cursor {
                Some(c) => sort_key(p) < (c.created_at, c.post_id.as_str()),
                None => true,
            })
            .collect();

        posts.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        posts.truncate(limit);
        Ok(posts)
    }

    fn create_report_atomic(&self, post: Post, author_id: &str, points: u64) -> Result<User> {
        self.with_user_lock(author_id, || {
            let mut user = self.require_user(author_id)?;
            if self.inner.posts.contains_key(&post.id) {
                return Err(AppError::Conflict(format!("Post {} already exists", post.id)));
            }
            user.award(points);
            self.inner.posts.insert(post.id.clone(), post);
            self.inner.users.insert(user.id.clone(), user.clone());
            Ok(user)
        })
    }

    fn list_rewards(&self) -> Result<Vec<Reward>> {
        let mut rewards: Vec<Reward> = self
            .inner
            .rewards
            .iter()
            .map(|r| r.value().clone())
            .collect();
        rewards.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rewards)
    }

    fn get_reward(&self, reward_id: &str) -> Result<Option<Reward>> {
        Ok(self.inner.rewards.get(reward_id).map(|r| r.clone()))
    }

    fn redeem_atomic(
        &self,
        user_id: &str,
        reward: &Reward,
        idempotency_key: &str,
        now: DateTime<Utc>,
    ) -> Result<RedemptionOutcome> {
        self.with_user_lock(user_id, || {
            let key = (user_id.to_string(), idempotency_key.to_string());
            let existing = self.inner.redemptions.get(&key).map(|r| r.clone());
            if let Some(redemption) = existing {
                if redemption.reward_id != reward.id {
                    return Err(AppError::Conflict(
                        "Idempotency key already used for a different reward".to_string(),
                    ));
                }
                return Ok(RedemptionOutcome {
                    redemption,
                    user: self.require_user(user_id)?,
                    replayed: true,
                });
            }

            let mut user = self.require_user(user_id)?;
            if reward.is_expired(now) {
                return Err(AppError::RewardExpired(reward.id.clone()));
            }
            if !user.spend(reward.points_cost) {
                return Err(AppError::InsufficientPoints {
                    needed: reward.points_cost,
                    available: user.available_points(),
                });
            }

            let redemption = Redemption {
                code: generate_code(),
                user_id: user_id.to_string(),
                reward_id: reward.id.clone(),
                points_spent: reward.points_cost,
                redeemed_at: now,
                idempotency_key: idempotency_key.to_string(),
            };
            self.inner.redemptions.insert(key, redemption.clone());
            self.inner.users.insert(user.id.clone(), user.clone());

            Ok(RedemptionOutcome {
                redemption,
                user,
                replayed: false,
            })
        })
    }

    fn list_challenges(&self) -> Result<Vec<Challenge>> {
        let mut challenges: Vec<Challenge> = self
            .inner
            .challenges
            .iter()
            .map(|c| c.value().clone())
            .collect();
        challenges.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        Ok(challenges)
    }

    fn query_map_elements(&self, bounds: Option<&BoundingBox>) -> Result<Vec<MapElement>> {
        let rect = bounds.map(BoundingBox::to_rect);
        let mut elements: Vec<MapElement> = self
            .inner
            .map_elements
            .iter()
            .filter(|e| rect.as_ref().map_or(true, |r| e.shape().intersects(r)))
            .map(|e| e.value().clone())
            .collect();
        elements.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(elements)
    }

    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.inner.users.get(user_id).map(|u| u.clone()))
    }

    fn upsert_user(&self, user: &User) -> Result<()> {
        self.inner.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        Ok(self.inner.user_stats.get(user_id).map(|s| s.clone()))
    }

    fn complete_trip_atomic(&self, trip: &Trip, now: DateTime<Utc>) -> Result<TripCompletion> {
        self.with_user_lock(&trip.user_id, || {
            let mut user = self.require_user(&trip.user_id)?;

            // Trip IDs are global; the per-user lock does not cover a
            // different user submitting the same ID, so claim it here.
            match self.inner.trips.entry(trip.id.clone()) {
                Entry::Occupied(existing) => {
                    let stored = existing.get().clone();
                    drop(existing);
                    if stored.user_id != trip.user_id {
                        return Err(AppError::Conflict(format!(
                            "Trip {} belongs to another user",
                            trip.id
                        )));
                    }
                    return Ok(TripCompletion {
                        trip: stored,
                        user,
                        was_new: false,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(trip.clone());
                }
            }

            let mut stats = self
                .inner
                .user_stats
                .get(&trip.user_id)
                .map(|s| s.clone())
                .unwrap_or_default();

            let was_new = stats.update_from_trip(trip, now);
            if was_new {
                user.apply_trip(&TripMetrics {
                    points_earned: trip.points_earned,
                    co2_saved: trip.co2_saved,
                    calories_burned: trip.calories_burned,
                    money_saved: trip.money_saved,
                });
                self.inner.user_stats.insert(user.id.clone(), stats);
                self.inner.users.insert(user.id.clone(), user.clone());
            }

            Ok(TripCompletion {
                trip: trip.clone(),
                user,
                was_new,
            })
        })
    }
}
