// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community posts and infrastructure reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{GeoPoint, User};

/// Kind of issue a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Traffic,
    Infrastructure,
    Safety,
    PublicTransport,
    Other,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Traffic,
        ReportType::Infrastructure,
        ReportType::Safety,
        ReportType::PublicTransport,
        ReportType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Traffic => "traffic",
            ReportType::Infrastructure => "infrastructure",
            ReportType::Safety => "safety",
            ReportType::PublicTransport => "public_transport",
            ReportType::Other => "other",
        }
    }

    /// Label shown on the report picker.
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Traffic => "Tráfego",
            ReportType::Infrastructure => "Infraestrutura",
            ReportType::Safety => "Segurança",
            ReportType::PublicTransport => "Transporte público",
            ReportType::Other => "Outro",
        }
    }
}

/// Moderation state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Investigating,
    Resolved,
    Rejected,
}

/// Report-specific fields, present only on posts flagged as reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDetails {
    pub report_type: ReportType,
    pub status: ReportStatus,
}

/// A feed post. Reports are posts with `report` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PostRecord", into = "PostRecord")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    /// Denormalized author, absent for anonymous reports
    pub user: Option<User>,
    pub content: String,
    pub media_urls: Vec<String>,
    pub location: Option<GeoPoint>,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub report: Option<ReportDetails>,
}

impl Post {
    pub fn is_report(&self) -> bool {
        self.report.is_some()
    }

    pub fn report_type(&self) -> Option<ReportType> {
        self.report.map(|r| r.report_type)
    }

    pub fn status(&self) -> Option<ReportStatus> {
        self.report.map(|r| r.status)
    }
}

/// Wire shape of a post: flat `isReport`/`reportType`/`status` fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostRecord {
    id: String,
    user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    content: String,
    #[serde(default)]
    media_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<GeoPoint>,
    likes: u32,
    comments: u32,
    created_at: DateTime<Utc>,
    is_report: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    report_type: Option<ReportType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<ReportStatus>,
}

/// Inconsistent report fields on a post record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostError {
    #[error("report {0} has no reportType")]
    MissingReportType(String),
    #[error("post {0} is not a report but carries report fields")]
    UnexpectedReportFields(String),
}

impl TryFrom<PostRecord> for Post {
    type Error = PostError;

    fn try_from(r: PostRecord) -> Result<Self, Self::Error> {
        // A missing status on a report means it has not been moderated yet.
        let report = match (r.is_report, r.report_type) {
            (true, Some(report_type)) => Some(ReportDetails {
                report_type,
                status: r.status.unwrap_or(ReportStatus::Pending),
            }),
            (true, None) => return Err(PostError::MissingReportType(r.id)),
            (false, None) if r.status.is_none() => None,
            (false, _) => return Err(PostError::UnexpectedReportFields(r.id)),
        };
        Ok(Post {
            id: r.id,
            user_id: r.user_id,
            user: r.user,
            content: r.content,
            media_urls: r.media_urls,
            location: r.location,
            likes: r.likes,
            comments: r.comments,
            created_at: r.created_at,
            report,
        })
    }
}

impl From<Post> for PostRecord {
    fn from(p: Post) -> Self {
        PostRecord {
            is_report: p.report.is_some(),
            report_type: p.report_type(),
            status: p.status(),
            id: p.id,
            user_id: p.user_id,
            user: p.user,
            content: p.content,
            media_urls: p.media_urls,
            location: p.location,
            likes: p.likes,
            comments: p.comments,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(extra: serde_json::Value) -> serde_json::Value {
        let mut value = json!({
            "id": "1",
            "userId": "user1",
            "content": "Bike to work",
            "mediaUrls": [],
            "likes": 0,
            "comments": 0,
            "createdAt": "2023-05-15T08:30:00Z"
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        value
    }

    #[test]
    fn test_report_fields_only_on_reports() {
        let post: Post = serde_json::from_value(record(json!({ "isReport": false }))).unwrap();

        assert!(!post.is_report());
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["isReport"], false);
        assert!(value.get("reportType").is_none());
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_report_without_status_defaults_to_pending() {
        let post: Post = serde_json::from_value(json!({
            "id": "2",
            "userId": "user2",
            "content": "Pothole",
            "likes": 3,
            "comments": 1,
            "createdAt": "2023-05-14T15:20:00Z",
            "isReport": true,
            "reportType": "public_transport"
        }))
        .unwrap();

        assert_eq!(post.report_type(), Some(ReportType::PublicTransport));
        assert_eq!(post.status(), Some(ReportStatus::Pending));
    }

    #[test]
    fn test_rejects_inconsistent_report_fields() {
        let cases = [
            json!({ "isReport": true, "status": "resolved" }),
            json!({ "isReport": true }),
            json!({ "isReport": false, "reportType": "safety", "status": "resolved" }),
            json!({ "isReport": false, "reportType": "traffic" }),
            json!({ "isReport": false, "status": "pending" }),
        ];
        for extra in cases {
            let result = serde_json::from_value::<Post>(record(extra.clone()));
            assert!(result.is_err(), "accepted {}", extra);
        }
    }

    #[test]
    fn test_record_errors_name_the_post() {
        let r: PostRecord = serde_json::from_value(record(json!({ "isReport": true }))).unwrap();
        let err = Post::try_from(r).unwrap_err();
        assert_eq!(err, PostError::MissingReportType("1".to_string()));
    }
}
