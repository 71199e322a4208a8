//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honoured for local development.

use std::env;

use crate::components::theme::ColorScheme;
use crate::services::map::MapRendererKind;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Mobile/web client origin allowed by CORS
    pub frontend_url: String,
    /// Palette handed to every view model
    pub color_scheme: ColorScheme,
    /// Which map capability to inject into the map screen
    pub map_renderer: MapRendererKind,
    /// Points awarded for each accepted report
    pub report_points: u64,
    /// Load the bundled demo data into the store at startup
    pub seed_mock_data: bool,
}

impl Config {
    /// Config for tests: seeded store, native map, dark palette.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:8081".to_string(),
            color_scheme: ColorScheme::Dark,
            map_renderer: MapRendererKind::Native,
            report_points: 10,
            seed_mock_data: true,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: parse_var("PORT", 8080)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            color_scheme: match env::var("COLOR_SCHEME") {
                Ok(raw) => ColorScheme::parse(raw.trim())
                    .ok_or(ConfigError::Invalid("COLOR_SCHEME", raw))?,
                Err(_) => ColorScheme::default(),
            },
            map_renderer: match env::var("MAP_RENDERER") {
                Ok(raw) => MapRendererKind::parse(raw.trim())
                    .ok_or(ConfigError::Invalid("MAP_RENDERER", raw))?,
                Err(_) => MapRendererKind::Native,
            },
            report_points: parse_var("REPORT_POINTS", 10)?,
            seed_mock_data: parse_var("SEED_MOCK_DATA", true)?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
