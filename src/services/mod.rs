// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod form;
pub mod geolocation;
pub mod session;

pub use form::WorkoutForm;
pub use geolocation::Geolocator;
pub use session::{SessionController, SessionSettings, DEFAULT_MAP_ZOOM};
