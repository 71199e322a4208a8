// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TheMob: sustainable urban mobility for Teresina.
//!
//! Trip tracking with points for greener transport, community problem
//! reports, partner rewards, and a map of bike lanes, bus routes and safe
//! sidewalks. Screens are modelled as state controllers over a
//! [`db::Repository`], and an axum API serves them to the mobile client.

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use std::sync::Arc;

use components::Theme;
use config::Config;
use db::Repository;
use services::{MapService, ReportService, RewardService, TripService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub repo: Arc<dyn Repository>,
    pub theme: Theme,
    pub trips: TripService,
    pub reports: ReportService,
    pub rewards: RewardService,
    pub map: MapService,
}

impl AppState {
    /// Wire every service to `repo` using the settings in `config`.
    pub fn new(config: Config, repo: Arc<dyn Repository>) -> Self {
        let theme = Theme::for_scheme(config.color_scheme);
        let renderer = config.map_renderer.renderer();
        Self {
            theme,
            trips: TripService::new(repo.clone()),
            reports: ReportService::new(repo.clone(), config.report_points),
            rewards: RewardService::new(repo.clone()),
            map: MapService::new(repo.clone(), renderer),
            repo,
            config,
        }
    }
}
