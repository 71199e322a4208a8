// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home screen trip tracking.
//!
//! `Idle` until a transport is picked, `Ready` with a transport, and
//! `Tracking` while a trip is being recorded. Only one trip is tracked
//! at a time.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::{
    points_badge, post_card, transport_selector, PointsBadge, PostCard, Theme, TransportOption,
};
use crate::models::{GeoPoint, Post, TransportType, User};
use crate::services::trips::CompleteTripRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Idle,
    Ready(TransportType),
    Tracking {
        transport: TransportType,
        started_at: DateTime<Utc>,
    },
}

/// A finished tracking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingSession {
    pub transport: TransportType,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
}

impl TrackingSession {
    pub fn duration(&self) -> chrono::Duration {
        self.stopped_at - self.started_at
    }

    /// Trip completion payload for this session.
    pub fn into_trip_request(
        self,
        trip_id: impl Into<String>,
        user_id: impl Into<String>,
        distance_meters: f64,
        route: Vec<GeoPoint>,
    ) -> Option<CompleteTripRequest> {
        let start_location = *route.first()?;
        let end_location = *route.last()?;
        Some(CompleteTripRequest {
            id: trip_id.into(),
            user_id: user_id.into(),
            transport_type: self.transport,
            start_location,
            end_location,
            distance: distance_meters,
            start_time: self.started_at,
            end_time: self.stopped_at,
            route,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Outline,
}

/// The start/stop button as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackingButton {
    pub action: ControlAction,
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub enabled: bool,
}

/// Everything the home screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub points: PointsBadge,
    pub transports: Vec<TransportOption>,
    pub control: TrackingButton,
    pub posts: Vec<PostCard>,
}

#[derive(Debug, Clone)]
pub struct HomeScreen {
    state: TrackingState,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self {
            state: TrackingState::Idle,
        }
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn selected_transport(&self) -> Option<TransportType> {
        match self.state {
            TrackingState::Idle => None,
            TrackingState::Ready(t) | TrackingState::Tracking { transport: t, .. } => Some(t),
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Tracking { .. })
    }

    /// Pick a transport. Ignored while a trip is being tracked.
    pub fn select_transport(&mut self, transport: TransportType) {
        if !self.is_tracking() {
            self.state = TrackingState::Ready(transport);
        }
    }

    /// Begin tracking. Returns `false` if no transport is selected or a
    /// trip is already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        match self.state {
            TrackingState::Ready(transport) => {
                tracing::debug!(transport = %transport, "Tracking started");
                self.state = TrackingState::Tracking {
                    transport,
                    started_at: now,
                };
                true
            }
            TrackingState::Idle | TrackingState::Tracking { .. } => false,
        }
    }

    /// Stop tracking, keeping the transport selected.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<TrackingSession> {
        let TrackingState::Tracking {
            transport,
            started_at,
        } = self.state
        else {
            return None;
        };

        self.state = TrackingState::Ready(transport);
        let session = TrackingSession {
            transport,
            started_at,
            stopped_at: now.max(started_at),
        };
        tracing::debug!(
            transport = %transport,
            seconds = session.duration().num_seconds(),
            "Tracking stopped"
        );
        Some(session)
    }

    pub fn control(&self) -> TrackingButton {
        match self.state {
            TrackingState::Tracking { .. } => TrackingButton {
                action: ControlAction::Stop,
                label: "Parar rota",
                variant: ButtonVariant::Outline,
                enabled: true,
            },
            TrackingState::Idle | TrackingState::Ready(_) => TrackingButton {
                action: ControlAction::Start,
                label: "Iniciar rota",
                variant: ButtonVariant::Primary,
                enabled: self.selected_transport().is_some(),
            },
        }
    }

    /// Press the control button.
    pub fn press_control(&mut self, now: DateTime<Utc>) -> Option<TrackingSession> {
        match self.control().action {
            ControlAction::Start => {
                self.start(now);
                None
            }
            ControlAction::Stop => self.stop(now),
        }
    }

    pub fn view(&self, user: &User, feed: &[Post], theme: &Theme, now: DateTime<Utc>) -> HomeView {
        HomeView {
            points: points_badge(user.points, theme),
            transports: transport_selector(self.selected_transport(), theme),
            control: self.control(),
            posts: feed.iter().map(|p| post_card(p, theme, now)).collect(),
        }
    }
}
