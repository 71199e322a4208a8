// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community report submission.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::{GeoPoint, Post, ReportDetails, ReportStatus, ReportType, User};

/// Author ID stored on reports filed anonymously.
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// A captured report ready to be filed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    /// Reference to the captured photo, video or audio clip
    #[validate(length(min = 1, max = 2048))]
    pub media_url: String,
    pub report_type: ReportType,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// A filed report and the author's updated record.
#[derive(Debug, Clone)]
pub struct FiledReport {
    pub post: Post,
    pub author: User,
    pub points_awarded: u64,
}

/// Files reports as feed posts and rewards their authors.
#[derive(Clone)]
pub struct ReportService {
    repo: Arc<dyn Repository>,
    points_per_report: u64,
}

impl ReportService {
    pub fn new(repo: Arc<dyn Repository>, points_per_report: u64) -> Self {
        Self {
            repo,
            points_per_report,
        }
    }

    /// File a report. New reports always start out pending.
    pub fn submit(&self, submission: ReportSubmission, now: DateTime<Utc>) -> Result<FiledReport> {
        submission.validate()?;
        if submission.location.is_some_and(|l| !l.is_valid()) {
            return Err(AppError::BadRequest("Location out of range".to_string()));
        }

        let author = self
            .repo
            .get_user(&submission.user_id)?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", submission.user_id)))?;

        let post = build_report_post(&submission, &author, now);

        tracing::info!(
            post_id = %post.id,
            report_type = submission.report_type.as_str(),
            anonymous = submission.is_anonymous,
            "Filing report"
        );

        let author = self
            .repo
            .create_report_atomic(post.clone(), &author.id, self.points_per_report)?;

        Ok(FiledReport {
            post,
            author,
            points_awarded: self.points_per_report,
        })
    }
}

fn build_report_post(submission: &ReportSubmission, author: &User, now: DateTime<Utc>) -> Post {
    let (user_id, user) = if submission.is_anonymous {
        (ANONYMOUS_USER_ID.to_string(), None)
    } else {
        (author.id.clone(), Some(author.clone()))
    };

    Post {
        id: Uuid::new_v4().to_string(),
        user_id,
        user,
        content: submission.description.trim().to_string(),
        media_urls: vec![submission.media_url.clone()],
        location: submission.location,
        likes: 0,
        comments: 0,
        created_at: now,
        report: Some(ReportDetails {
            report_type: submission.report_type,
            status: ReportStatus::Pending,
        }),
    }
}
