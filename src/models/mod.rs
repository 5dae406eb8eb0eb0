// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod location;
pub mod summary;
pub mod workout;

pub use location::Location;
pub use summary::{MarkerPopup, SummaryDetail, WorkoutSummary};
pub use workout::{KindParams, NewWorkout, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
