// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout entry form parsing and validation.

use crate::error::{AppError, Result};
use crate::models::{KindParams, Location, NewWorkout, WorkoutKind};

/// Raw values submitted from the entry form.
///
/// `kind_param` is cadence (spm) for running and elevation gain (m) for
/// cycling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub kind_param: f64,
}

impl WorkoutForm {
    pub fn new(kind: WorkoutKind, distance_km: f64, duration_min: f64, kind_param: f64) -> Self {
        Self {
            kind,
            distance_km,
            duration_min,
            kind_param,
        }
    }

    /// Build a form from text fields. Unparsable numbers become NaN and are
    /// rejected later by [`validate`](Self::validate).
    pub fn from_fields(kind: WorkoutKind, distance: &str, duration: &str, kind_param: &str) -> Self {
        Self::new(
            kind,
            parse_number(distance),
            parse_number(duration),
            parse_number(kind_param),
        )
    }

    /// Check every numeric field and return the kind-specific parameters.
    ///
    /// Distance, duration and cadence must be finite and positive. Elevation
    /// gain must be finite and may be zero, but not negative.
    pub fn validate(&self) -> Result<KindParams> {
        require_positive("distance", self.distance_km)?;
        require_positive("duration", self.duration_min)?;

        match self.kind {
            WorkoutKind::Running => {
                require_positive("cadence", self.kind_param)?;
                Ok(KindParams::Running {
                    cadence_spm: self.kind_param,
                })
            }
            WorkoutKind::Cycling => {
                require_non_negative("elevation gain", self.kind_param)?;
                Ok(KindParams::Cycling {
                    elevation_gain_m: self.kind_param,
                })
            }
        }
    }

    /// Validate the fields and attach the location picked on the map.
    ///
    /// Field errors take precedence over a missing location. A location
    /// with non-finite or out-of-range coordinates is rejected, since it
    /// could not be stored and read back.
    pub fn into_new_workout(self, location: Option<Location>) -> Result<NewWorkout> {
        let params = self.validate()?;
        let location = location.ok_or(AppError::NoLocationSelected)?;
        if !location.is_valid() {
            return Err(AppError::InvalidInput(format!(
                "location must be a valid coordinate, got ({}, {})",
                location.lat, location.lng
            )));
        }

        Ok(NewWorkout {
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            location,
            params,
        })
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "{} must be a number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }
    Ok(())
}
