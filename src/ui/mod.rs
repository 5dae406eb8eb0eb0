// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendering collaborators driven by the session controller.
//!
//! The controller only ever hands these traits plain data; it never reads
//! anything back from them.

pub mod terminal;

pub use terminal::{TerminalMap, TerminalView};

use crate::models::{Location, MarkerPopup, WorkoutSummary};

/// Map surface showing workout markers.
///
/// Clicks on the map are delivered to
/// [`SessionController::on_map_location_picked`](crate::services::SessionController::on_map_location_picked)
/// by whatever owns the event loop.
pub trait MapView {
    fn show_map(&mut self, center: Location, zoom: u8);
    fn add_marker(&mut self, location: Location, popup: &MarkerPopup);
    fn pan_to(&mut self, location: Location, zoom: u8);
    fn clear_markers(&mut self);
}

/// Workout list and entry form.
pub trait WorkoutView {
    fn render_list_row(&mut self, row: &WorkoutSummary);
    fn clear_list(&mut self);
    fn show_form(&mut self);
    fn hide_form(&mut self);
    fn clear_form(&mut self);
    fn toggle_field(&mut self, field: FormField);
    /// Blocking user-visible notification.
    fn alert(&mut self, message: &str);
}

/// Kind-specific form fields that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Cadence,
    Elevation,
}
