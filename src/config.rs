//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use crate::models::Location;
use crate::services::{SessionSettings, DEFAULT_MAP_ZOOM};
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file backing the key-value store
    pub data_file: PathBuf,
    /// Zoom level used when showing or panning the map
    pub map_zoom: u8,
    /// Position reported by the geolocator (None = unavailable)
    pub start_position: Option<Location>,
    /// Simulated latency of the position fix
    pub geolocation_delay_ms: u64,
    /// Save interaction counts whenever a workout is selected
    pub persist_selections: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("maptrack.json"),
            map_zoom: DEFAULT_MAP_ZOOM,
            start_position: None,
            geolocation_delay_ms: 0,
            persist_selections: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let start_position = match env::var("MAPTRACK_START_POSITION") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.parse::<Location>()
                    .map_err(|e| ConfigError::Invalid("MAPTRACK_START_POSITION", e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            data_file: env::var("MAPTRACK_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("maptrack.json")),
            map_zoom: env::var("MAPTRACK_MAP_ZOOM")
                .unwrap_or_else(|_| DEFAULT_MAP_ZOOM.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAP_ZOOM),
            start_position,
            geolocation_delay_ms: env::var("MAPTRACK_GEOLOCATION_DELAY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
            persist_selections: env::var("MAPTRACK_PERSIST_SELECTIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }

    /// Controller settings derived from this config.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            map_zoom: self.map_zoom,
            persist_selections: self.persist_selections,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
