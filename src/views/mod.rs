// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen state controllers.
//!
//! Each screen owns its transient UI state and exposes transitions plus a
//! snapshot built from domain records. Persistence goes through services.

pub mod camera;
pub mod home;
pub mod map;
pub mod rewards;
pub mod statistics;

pub use camera::{
    CameraScreen, CameraView, CaptureDevice, CaptureError, PendingSubmission, Permission,
    SubmissionTicket,
};
pub use home::{HomeScreen, HomeView, TrackingSession, TrackingState};
pub use map::{MapFilterSet, MapScreen};
pub use rewards::{RewardsFilter, RewardsScreen, RewardsView};
pub use statistics::{StatisticsScreen, StatisticsView, TimePeriod};
