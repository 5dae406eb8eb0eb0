// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model: shared fields plus a closed set of kind-specific details.
//!
//! Derived metrics (pace, speed) and the label are computed once when the
//! record is constructed and stored alongside the inputs. Deserialized
//! records keep the stored values.

use crate::models::Location;
use crate::time_utils::month_day;
use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of trailing timestamp digits used for a workout id.
const ID_DIGITS: usize = 10;

/// Workout kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase identifier ("running", "cycling").
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown workout kind '{0}' (expected running or cycling)")]
pub struct ParseKindError(pub String);

impl FromStr for WorkoutKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" | "run" => Ok(WorkoutKind::Running),
            "cycling" | "ride" => Ok(WorkoutKind::Cycling),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Opaque workout identifier, derived from the creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Build an id from the last ten digits of a millisecond timestamp.
    pub fn from_millis(millis: i64) -> Self {
        let digits = millis.unsigned_abs().to_string();
        let start = digits.len().saturating_sub(ID_DIGITS);
        Self(digits[start..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind-specific input parameter, before any metric is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KindParams {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl KindParams {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            KindParams::Running { .. } => WorkoutKind::Running,
            KindParams::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Validated input for a new workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewWorkout {
    /// Distance in kilometers
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    pub location: Location,
    pub params: KindParams,
}

/// Kind-specific payload with its derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence_spm: f64,
        /// Minutes per kilometer
        pace_min_per_km: f64,
    },
    Cycling {
        /// Elevation gain in meters
        elevation_gain_m: f64,
        /// Kilometers per hour
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A recorded workout.
///
/// Everything except the interaction counter is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    distance_km: f64,
    duration_min: f64,
    location: Location,
    #[serde(default)]
    interaction_count: u32,
    label: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout timestamped now.
    pub fn running(
        distance_km: f64,
        duration_min: f64,
        location: Location,
        cadence_spm: f64,
    ) -> Self {
        Self::create(
            NewWorkout {
                distance_km,
                duration_min,
                location,
                params: KindParams::Running { cadence_spm },
            },
            Utc::now(),
        )
    }

    /// Create a cycling workout timestamped now.
    pub fn cycling(
        distance_km: f64,
        duration_min: f64,
        location: Location,
        elevation_gain_m: f64,
    ) -> Self {
        Self::create(
            NewWorkout {
                distance_km,
                duration_min,
                location,
                params: KindParams::Cycling { elevation_gain_m },
            },
            Utc::now(),
        )
    }

    /// Create a workout with an id derived from `created_at`.
    pub fn create(new: NewWorkout, created_at: DateTime<Utc>) -> Self {
        let id = WorkoutId::from_millis(created_at.timestamp_millis());
        Self::with_id(id, new, created_at)
    }

    /// Create a workout with an explicit id.
    ///
    /// Inputs are assumed valid; a zero distance or duration yields a
    /// non-finite metric.
    pub fn with_id(id: WorkoutId, new: NewWorkout, created_at: DateTime<Utc>) -> Self {
        let details = match new.params {
            KindParams::Running { cadence_spm } => WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: new.duration_min / new.distance_km,
            },
            KindParams::Cycling { elevation_gain_m } => WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: new.distance_km / (new.duration_min / 60.0),
            },
        };

        let label = describe(
            details.kind(),
            &created_at.with_timezone(&Local).date_naive(),
        );

        Self {
            id,
            created_at,
            distance_km: new.distance_km,
            duration_min: new.duration_min,
            location: new.location,
            interaction_count: 0,
            label,
            details,
        }
    }

    /// Record one user selection of this workout.
    pub fn activate(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Pace in min/km (running only).
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h (cycling only).
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { cadence_spm, .. } => Some(cadence_spm),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => Some(elevation_gain_m),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

/// Build a workout label, e.g. "Running on April 14".
pub fn describe(kind: WorkoutKind, date: &impl Datelike) -> String {
    format!("{} on {}", kind.display_name(), month_day(date))
}
