// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camera screen: capture media, describe the issue, file a report.

use std::future::Future;

use crate::models::{GeoPoint, ReportType};
use crate::services::reports::ReportSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Undetermined,
    Denied,
    Granted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    #[default]
    Photo,
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Back,
    Front,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStep {
    Capture,
    Details,
}

/// Why a capture produced no media.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// Access was revoked or refused by the OS
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("capture failed: {0}")]
    Hardware(String),
    /// The user backed out of the capture
    #[error("capture dismissed")]
    Dismissed,
}

/// Device camera/microphone. Resolves to a reference to the captured media.
pub trait CaptureDevice {
    fn capture(
        &self,
        mode: CaptureMode,
        facing: Facing,
    ) -> impl Future<Output = Result<String, CaptureError>> + Send;
}

/// Identifies one in-flight submission. Outcomes for any other ticket are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// A report handed to the caller for filing.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub submission: ReportSubmission,
}

/// A report type chip on the details form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTypeOption {
    pub report_type: ReportType,
    pub label: &'static str,
    pub selected: bool,
}

/// What the camera screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraView {
    PermissionRequest {
        message: &'static str,
        action: &'static str,
    },
    Capture {
        mode: CaptureMode,
        facing: Facing,
        capture_enabled: bool,
        notice: Option<String>,
    },
    Details {
        media_url: Option<String>,
        options: Vec<ReportTypeOption>,
        is_anonymous: bool,
        description: String,
        submit_enabled: bool,
        failure: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct CameraScreen {
    permission: Permission,
    facing: Facing,
    mode: CaptureMode,
    step: ReportStep,
    media_url: Option<String>,
    report_type: Option<ReportType>,
    is_anonymous: bool,
    description: String,
    is_capturing: bool,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
    notice: Option<String>,
    failure: Option<String>,
}

impl CameraScreen {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            facing: Facing::default(),
            mode: CaptureMode::default(),
            step: ReportStep::Capture,
            media_url: None,
            report_type: None,
            is_anonymous: false,
            description: String::new(),
            is_capturing: false,
            in_flight: None,
            next_ticket: 0,
            notice: None,
            failure: None,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn step(&self) -> ReportStep {
        self.step
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    pub fn report_type(&self) -> Option<ReportType> {
        self.report_type
    }

    pub fn is_capturing(&self) -> bool {
        self.is_capturing
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    // ─── Capture step ────────────────────────────────────────────

    pub fn set_permission(&mut self, permission: Permission) {
        self.permission = permission;
    }

    pub fn toggle_facing(&mut self) {
        self.facing = self.facing.flipped();
    }

    pub fn set_mode(&mut self, mode: CaptureMode) {
        self.mode = mode;
    }

    pub fn can_capture(&self) -> bool {
        self.permission == Permission::Granted
            && self.step == ReportStep::Capture
            && !self.is_capturing
    }

    /// Suspend the capture control. Returns the device settings to use, or
    /// `None` when capture is not possible right now.
    pub fn begin_capture(&mut self) -> Option<(CaptureMode, Facing)> {
        if !self.can_capture() {
            return None;
        }
        self.is_capturing = true;
        self.notice = None;
        Some((self.mode, self.facing))
    }

    pub fn finish_capture(&mut self, result: Result<String, CaptureError>) {
        self.is_capturing = false;
        match result {
            Ok(media_url) => {
                self.media_url = Some(media_url);
                self.step = ReportStep::Details;
            }
            Err(CaptureError::Dismissed) => {}
            Err(CaptureError::PermissionDenied) => {
                tracing::warn!("Camera permission revoked during capture");
                self.permission = Permission::Denied;
            }
            Err(err @ CaptureError::Hardware(_)) => {
                tracing::warn!(error = %err, "Capture failed");
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Run one capture against `device`.
    pub async fn capture<D: CaptureDevice>(&mut self, device: &D) {
        let Some((mode, facing)) = self.begin_capture() else {
            return;
        };
        let result = device.capture(mode, facing).await;
        self.finish_capture(result);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ─── Details step ────────────────────────────────────────────

    pub fn select_report_type(&mut self, report_type: ReportType) {
        self.report_type = Some(report_type);
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn clear_report_type(&mut self) {
        self.report_type = None;
    }

    pub fn toggle_anonymous(&mut self) {
        self.is_anonymous = !self.is_anonymous;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn can_submit(&self) -> bool {
        self.step == ReportStep::Details && self.report_type.is_some() && self.in_flight.is_none()
    }

    /// Back to capture, dropping the captured media. An in-flight
    /// submission is abandoned and its outcome ignored.
    pub fn cancel(&mut self) {
        self.step = ReportStep::Capture;
        self.media_url = None;
        self.failure = None;
        self.in_flight = None;
    }

    /// Assemble the report for filing. The form keeps its contents until
    /// [`submission_accepted`](Self::submission_accepted).
    pub fn build_submission(
        &mut self,
        user_id: &str,
        location: Option<GeoPoint>,
    ) -> Option<PendingSubmission> {
        if !self.can_submit() {
            return None;
        }
        let report_type = self.report_type?;
        let media_url = self.media_url.clone()?;

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.failure = None;
        Some(PendingSubmission {
            ticket,
            submission: ReportSubmission {
                user_id: user_id.to_string(),
                media_url,
                report_type,
                is_anonymous: self.is_anonymous,
                description: self.description.clone(),
                location,
            },
        })
    }

    /// Consume the in-flight ticket if it matches.
    fn settle(&mut self, ticket: SubmissionTicket) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(?ticket, "Ignoring outcome of abandoned submission");
            return false;
        }
        self.in_flight = None;
        true
    }

    /// The report was filed; reset the form.
    pub fn submission_accepted(&mut self, ticket: SubmissionTicket) {
        if !self.settle(ticket) {
            return;
        }
        self.media_url = None;
        self.report_type = None;
        self.is_anonymous = false;
        self.description.clear();
        self.failure = None;
        self.step = ReportStep::Capture;
    }

    /// Filing failed; keep everything so the user can retry.
    pub fn submission_failed(&mut self, ticket: SubmissionTicket, reason: impl Into<String>) {
        if !self.settle(ticket) {
            return;
        }
        self.failure = Some(reason.into());
    }

    pub fn view(&self) -> CameraView {
        if self.permission != Permission::Granted {
            return CameraView::PermissionRequest {
                message: "We need your permission to show the camera",
                action: "Grant Permission",
            };
        }
        match self.step {
            ReportStep::Capture => CameraView::Capture {
                mode: self.mode,
                facing: self.facing,
                capture_enabled: self.can_capture(),
                notice: self.notice.clone(),
            },
            ReportStep::Details => CameraView::Details {
                media_url: self.media_url.clone(),
                options: ReportType::ALL
                    .into_iter()
                    .map(|t| ReportTypeOption {
                        report_type: t,
                        label: t.label(),
                        selected: self.report_type == Some(t),
                    })
                    .collect(),
                is_anonymous: self.is_anonymous,
                description: self.description.clone(),
                submit_enabled: self.can_submit(),
                failure: self.failure.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDevice(Result<String, CaptureError>);

    impl CaptureDevice for FakeDevice {
        async fn capture(
            &self,
            _mode: CaptureMode,
            _facing: Facing,
        ) -> Result<String, CaptureError> {
            self.0.clone()
        }
    }

    fn photo() -> FakeDevice {
        FakeDevice(Ok("file:///captures/1.jpg".to_string()))
    }

    #[tokio::test]
    async fn test_denied_permission_shows_request() {
        let mut screen = CameraScreen::new(Permission::Denied);
        screen.capture(&photo()).await;
        assert!(matches!(screen.view(), CameraView::PermissionRequest { .. }));
        assert_eq!(screen.step(), ReportStep::Capture);
    }

    #[tokio::test]
    async fn test_capture_moves_to_details() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.capture(&photo()).await;
        assert_eq!(screen.step(), ReportStep::Details);
        assert_eq!(screen.media_url(), Some("file:///captures/1.jpg"));
        assert!(!screen.can_submit());

        screen.select_report_type(ReportType::Safety);
        assert!(screen.can_submit());
        screen.clear_report_type();
        assert!(!screen.can_submit());
    }

    #[tokio::test]
    async fn test_dismissed_capture_changes_nothing() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.capture(&FakeDevice(Err(CaptureError::Dismissed))).await;
        assert_eq!(screen.step(), ReportStep::Capture);
        assert!(screen.notice().is_none());
        assert!(!screen.is_capturing());
    }

    #[tokio::test]
    async fn test_hardware_failure_shows_notice() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen
            .capture(&FakeDevice(Err(CaptureError::Hardware("busy".to_string()))))
            .await;
        assert_eq!(screen.step(), ReportStep::Capture);
        assert_eq!(screen.notice(), Some("capture failed: busy"));
        screen.dismiss_notice();
        assert!(screen.notice().is_none());
    }

    #[tokio::test]
    async fn test_permission_error_revokes() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen
            .capture(&FakeDevice(Err(CaptureError::PermissionDenied)))
            .await;
        assert_eq!(screen.permission(), Permission::Denied);
    }

    #[test]
    fn test_capture_control_suspended_while_awaiting() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.set_mode(CaptureMode::Video);
        screen.toggle_facing();
        assert_eq!(screen.begin_capture(), Some((CaptureMode::Video, Facing::Front)));
        assert!(screen.is_capturing());
        assert_eq!(screen.begin_capture(), None);
        assert!(matches!(
            screen.view(),
            CameraView::Capture {
                capture_enabled: false,
                ..
            }
        ));
        screen.finish_capture(Ok("file:///captures/2.mp4".to_string()));
        assert!(!screen.is_capturing());
    }

    #[tokio::test]
    async fn test_cancel_clears_media() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.capture(&photo()).await;
        screen.cancel();
        assert_eq!(screen.step(), ReportStep::Capture);
        assert!(screen.media_url().is_none());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_form() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.capture(&photo()).await;
        screen.select_report_type(ReportType::Traffic);
        screen.toggle_anonymous();
        screen.set_description("Semáforo quebrado");

        let first = screen.build_submission("user1", None).unwrap();
        let submission = first.submission;
        assert!(submission.is_anonymous);
        assert_eq!(submission.media_url, "file:///captures/1.jpg");
        assert!(!screen.can_submit());

        screen.submission_failed(first.ticket, "network unreachable");
        assert_eq!(screen.step(), ReportStep::Details);
        assert_eq!(screen.report_type(), Some(ReportType::Traffic));
        assert_eq!(screen.failure(), Some("network unreachable"));
        assert!(screen.can_submit());

        let retry = screen.build_submission("user1", None).unwrap();
        assert_eq!(retry.submission, submission);
        assert_ne!(retry.ticket, first.ticket);

        // The first attempt already failed; a late outcome for it is ignored.
        screen.submission_accepted(first.ticket);
        assert!(screen.is_submitting());

        screen.submission_accepted(retry.ticket);
        assert_eq!(screen.step(), ReportStep::Capture);
        assert!(screen.report_type().is_none());
        assert!(screen.media_url().is_none());
    }

    #[tokio::test]
    async fn test_cancel_during_submit_frees_new_capture() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.capture(&photo()).await;
        screen.select_report_type(ReportType::Safety);
        let stale = screen.build_submission("user1", None).unwrap();

        screen.cancel();
        assert!(!screen.is_submitting());

        screen
            .capture(&FakeDevice(Ok("file:///captures/b.jpg".to_string())))
            .await;
        screen.select_report_type(ReportType::Infrastructure);
        assert_eq!(screen.step(), ReportStep::Details);
        assert!(screen.can_submit());

        // The abandoned request resolves late and must not touch the new form.
        screen.submission_accepted(stale.ticket);
        assert_eq!(screen.media_url(), Some("file:///captures/b.jpg"));
        assert_eq!(screen.report_type(), Some(ReportType::Infrastructure));
        assert!(screen.can_submit());

        screen.submission_failed(stale.ticket, "timeout");
        assert!(screen.failure().is_none());
    }

    #[tokio::test]
    async fn test_submit_enabled_follows_report_type_for_every_type() {
        let mut screen = CameraScreen::new(Permission::Granted);
        screen.capture(&photo()).await;
        for report_type in ReportType::ALL {
            screen.select_report_type(report_type);
            assert!(screen.can_submit(), "{:?}", report_type);
            screen.clear_report_type();
            assert!(!screen.can_submit(), "{:?}", report_type);
        }

        // Cancel from a ready form drops the media.
        screen.select_report_type(ReportType::Infrastructure);
        assert!(screen.can_submit());
        screen.cancel();
        assert_eq!(screen.step(), ReportStep::Capture);
        assert!(screen.media_url().is_none());
    }
}
