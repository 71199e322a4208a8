// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod map;
pub mod reports;
pub mod rewards;
pub mod trips;

pub use map::{MapRenderer, MapRendererKind, MapRendering, MapService};
pub use reports::{FiledReport, ReportService, ReportSubmission};
pub use rewards::{RedeemRequest, RewardService};
pub use trips::{CompleteTripRequest, TripService};
