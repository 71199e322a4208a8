// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Domain model shared by every screen and service.

pub mod challenge;
pub mod map;
pub mod post;
pub mod reward;
pub mod stats;
pub mod transport;
pub mod trip;
pub mod user;

pub use challenge::Challenge;
pub use map::{BoundingBox, MapElement, MapElementType, MapError, MapFilter, MapShape};
pub use post::{Post, PostError, ReportDetails, ReportStatus, ReportType};
pub use reward::{Business, BusinessCategory, ContactInfo, Redemption, Reward, RewardCategory};
pub use stats::{Streak, UserStats};
pub use transport::{TransportProfile, TransportType, TripMetrics};
pub use trip::{GeoPoint, Trip, TripError};
pub use user::{User, UserTotals};
