// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain rendering data handed to the map and list collaborators.

use crate::models::{Workout, WorkoutDetails};
use crate::time_utils::format_utc_rfc3339;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One row in the workout list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub id: String,
    /// "running" or "cycling"
    pub kind: String,
    pub label: String,
    pub created_at: String,
    pub details: Vec<SummaryDetail>,
}

/// A single icon/value/unit cell in a list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryDetail {
    pub icon: String,
    pub value: String,
    pub unit: String,
}

impl SummaryDetail {
    fn new(icon: &str, value: String, unit: &str) -> Self {
        Self {
            icon: icon.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();

        let mut details = vec![
            SummaryDetail::new(kind.icon(), format!("{:.1}", workout.distance_km()), "km"),
            SummaryDetail::new("⏱", workout.duration_min().to_string(), "min"),
        ];

        match *workout.details() {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                details.push(SummaryDetail::new(
                    "⚡️",
                    format!("{:.1}", pace_min_per_km),
                    "min/km",
                ));
                details.push(SummaryDetail::new("🦶🏼", cadence_spm.to_string(), "spm"));
            }
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                details.push(SummaryDetail::new(
                    "⚡️",
                    format!("{:.1}", speed_km_per_h),
                    "km/h",
                ));
                details.push(SummaryDetail::new("⛰", elevation_gain_m.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().to_string(),
            kind: kind.as_str().to_string(),
            label: workout.label().to_string(),
            created_at: format_utc_rfc3339(workout.created_at()),
            details,
        }
    }
}

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPopup {
    /// Styling hook, e.g. "running-popup"
    pub class_name: String,
    pub content: String,
}

impl From<&Workout> for MarkerPopup {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        Self {
            class_name: format!("{}-popup", kind.as_str()),
            content: format!("{} {}", kind.icon(), workout.label()),
        }
    }
}
