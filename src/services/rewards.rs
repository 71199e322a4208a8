// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward redemption and challenge listing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::db::{RedemptionOutcome, Repository};
use crate::error::{AppError, Result};
use crate::models::{Challenge, Reward};

/// Client payload for `POST /api/rewards/{id}/redeem`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    /// Client-chosen key; retries with the same key return the first code
    #[validate(length(min = 1, max = 128))]
    pub idempotency_key: String,
}

#[derive(Clone)]
pub struct RewardService {
    repo: Arc<dyn Repository>,
}

impl RewardService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub fn rewards(&self) -> Result<Vec<Reward>> {
        self.repo.list_rewards()
    }

    /// Spend points on a reward.
    pub fn redeem(
        &self,
        reward_id: &str,
        request: RedeemRequest,
        now: DateTime<Utc>,
    ) -> Result<RedemptionOutcome> {
        request.validate()?;

        let reward = self
            .repo
            .get_reward(reward_id)?
            .ok_or_else(|| AppError::NotFound(format!("Reward {} not found", reward_id)))?;

        let outcome =
            self.repo
                .redeem_atomic(&request.user_id, &reward, &request.idempotency_key, now)?;

        if outcome.replayed {
            tracing::debug!(
                reward_id,
                user_id = %request.user_id,
                "Replaying earlier redemption"
            );
        } else {
            tracing::info!(
                reward_id,
                user_id = %request.user_id,
                points_spent = outcome.redemption.points_spent,
                remaining = outcome.user.available_points(),
                "Reward redeemed"
            );
        }
        Ok(outcome)
    }

    /// All challenges, or only those whose end date has not passed.
    pub fn challenges(&self, in_progress_only: bool, now: DateTime<Utc>) -> Result<Vec<Challenge>> {
        let challenges = self.repo.list_challenges()?;
        if !in_progress_only {
            return Ok(challenges);
        }
        Ok(challenges
            .into_iter()
            .filter(|c| c.is_in_progress(now))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDb;
    use chrono::TimeZone;

    fn service() -> (Arc<MemoryDb>, RewardService) {
        let db = Arc::new(MemoryDb::seeded());
        (db.clone(), RewardService::new(db))
    }

    fn redeem_request(user_id: &str, key: &str) -> RedeemRequest {
        RedeemRequest {
            user_id: user_id.to_string(),
            idempotency_key: key.to_string(),
        }
    }

    fn before_seed_expiry() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_redeem_deducts_spendable_balance() {
        let (_, service) = service();
        let outcome = service
            .redeem("2", redeem_request("user2", "k1"), before_seed_expiry())
            .unwrap();

        assert!(outcome.redemption.code.starts_with("TMB-"));
        assert_eq!(outcome.user.available_points(), 850 - 300);
        assert_eq!(outcome.user.points, 850);
    }

    #[test]
    fn test_redeem_same_key_twice_charges_once() {
        let (_, service) = service();
        let first = service
            .redeem("1", redeem_request("user1", "k1"), before_seed_expiry())
            .unwrap();
        let second = service
            .redeem("1", redeem_request("user1", "k1"), before_seed_expiry())
            .unwrap();

        assert!(second.replayed);
        assert_eq!(first.redemption.code, second.redemption.code);
        assert_eq!(second.user.available_points(), 1250 - 150);
    }

    #[test]
    fn test_redeem_rejects_insufficient_points() {
        let (db, service) = service();
        let mut user = db.get_user("user2").unwrap().unwrap();
        user.points_spent = 700;
        db.upsert_user(&user).unwrap();

        let err = service
            .redeem("2", redeem_request("user2", "k1"), before_seed_expiry())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientPoints {
                needed: 300,
                available: 150
            }
        ));
    }

    #[test]
    fn test_redeem_rejects_expired_reward() {
        let (_, service) = service();
        let err = service
            .redeem("1", redeem_request("user1", "k1"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::RewardExpired(_)));
    }

    #[test]
    fn test_redeem_unknown_reward() {
        let (_, service) = service();
        let err = service
            .redeem("404", redeem_request("user1", "k1"), before_seed_expiry())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_challenges_in_progress() {
        let (_, service) = service();
        let mid_june = Utc.with_ymd_and_hms(2023, 6, 10, 0, 0, 0).unwrap();

        let ids: Vec<String> = service
            .challenges(true, mid_june)
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["2", "3"]);
        assert_eq!(service.challenges(false, mid_june).unwrap().len(), 3);
        assert!(service.challenges(true, Utc::now()).unwrap().is_empty());
    }
}
