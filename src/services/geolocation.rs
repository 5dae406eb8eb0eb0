// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot geolocation.
//!
//! The position is requested once at startup and resolves exactly once,
//! either to a location or to `GeolocationUnavailable`. Nothing waits on it;
//! the event loop polls it next to user input.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Location;
use std::time::Duration;

/// Source of the initial position fix.
#[derive(Debug, Clone, Copy)]
pub struct Geolocator {
    fix: Option<Location>,
    delay: Duration,
}

impl Geolocator {
    pub fn new(fix: Option<Location>, delay: Duration) -> Self {
        Self { fix, delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.start_position,
            Duration::from_millis(config.geolocation_delay_ms),
        )
    }

    /// Resolve the current position.
    pub async fn current_position(self) -> Result<Location> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.fix {
            Some(location) => {
                tracing::info!(lat = location.lat, lng = location.lng, "Position acquired");
                Ok(location)
            }
            None => Err(AppError::GeolocationUnavailable(
                "no position source configured".to_string(),
            )),
        }
    }
}
