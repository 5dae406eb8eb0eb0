// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller.
//!
//! Owns the workout collection and the pending map location, and mediates
//! between user events, the rendering collaborators and storage:
//! 1. A map click stores the pending location and opens the form
//! 2. A form submission is validated and turned into a workout
//! 3. The workout is appended, rendered (marker + list row) and the whole
//!    collection is saved
//!
//! Markers need a ready map. Workouts loaded or created before the map is
//! ready get their markers when it first becomes ready, in creation order.

use crate::db::{KeyValueStore, WorkoutDb};
use crate::error::{AppError, Result};
use crate::models::{Location, MarkerPopup, Workout, WorkoutId, WorkoutSummary};
use crate::services::form::WorkoutForm;
use crate::ui::{FormField, MapView, WorkoutView};
use chrono::{DateTime, Utc};

/// Default map zoom level.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Controller behavior settings.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub map_zoom: u8,
    /// Save the collection after each selection so interaction counts
    /// survive restarts.
    pub persist_selections: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            map_zoom: DEFAULT_MAP_ZOOM,
            persist_selections: true,
        }
    }
}

/// Application state for one running session.
pub struct SessionController<S, M, V> {
    db: WorkoutDb<S>,
    map: M,
    view: V,
    settings: SessionSettings,
    workouts: Vec<Workout>,
    pending_location: Option<Location>,
    map_ready: bool,
}

impl<S: KeyValueStore, M: MapView, V: WorkoutView> SessionController<S, M, V> {
    pub fn new(db: WorkoutDb<S>, map: M, view: V, settings: SessionSettings) -> Self {
        Self {
            db,
            map,
            view,
            settings,
            workouts: Vec::new(),
            pending_location: None,
            map_ready: false,
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────

    /// Load stored workouts and render their list rows.
    pub fn initialize(&mut self) {
        self.workouts = self.db.load_workouts();
        tracing::info!(count = self.workouts.len(), "Session initialized");

        for workout in &self.workouts {
            self.view.render_list_row(&WorkoutSummary::from(workout));
        }

        if self.map_ready {
            self.render_all_markers();
        }
    }

    /// Handle the outcome of the startup geolocation request.
    pub fn on_position_resolved(&mut self, position: Result<Location>) {
        match position {
            Ok(location) => self.on_map_ready(location),
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine current position");
                self.view.alert(&e.user_message());
            }
        }
    }

    /// Show the map at `center`. The first time this happens, markers for
    /// all held workouts are rendered.
    pub fn on_map_ready(&mut self, center: Location) {
        self.map.show_map(center, self.settings.map_zoom);

        if self.map_ready {
            return;
        }
        self.map_ready = true;
        tracing::debug!(markers = self.workouts.len(), "Map ready, rendering markers");
        self.render_all_markers();
    }

    /// Erase stored workouts and start over with an empty session.
    ///
    /// If storage cannot be cleared the user is alerted and the session is
    /// left as it was.
    pub fn reset(&mut self) -> Result<()> {
        if let Err(e) = self.db.clear() {
            tracing::error!(error = %e, "Failed to clear stored workouts");
            self.view.alert(&e.user_message());
            return Err(e);
        }

        self.workouts.clear();
        self.pending_location = None;
        self.map.clear_markers();
        self.view.clear_list();
        self.view.clear_form();
        self.view.hide_form();

        self.initialize();
        Ok(())
    }

    // ─── User Events ─────────────────────────────────────────────

    /// Remember where the user clicked and open the entry form.
    pub fn on_map_location_picked(&mut self, location: Location) {
        tracing::debug!(lat = location.lat, lng = location.lng, "Location picked");
        self.pending_location = Some(location);
        self.view.show_form();
    }

    /// Validate the form and record a new workout at the pending location.
    ///
    /// On error the user is alerted and nothing changes. A failed save is
    /// alerted too, but the workout stays in the session.
    pub fn on_form_submit(&mut self, form: WorkoutForm) -> Result<&Workout> {
        self.submit_at(form, Utc::now())
    }

    fn submit_at(&mut self, form: WorkoutForm, now: DateTime<Utc>) -> Result<&Workout> {
        let new = match form.into_new_workout(self.pending_location) {
            Ok(new) => new,
            Err(e) => return Err(self.reject(e)),
        };
        let workout = Workout::with_id(self.next_id(now), new, now);
        tracing::info!(
            workout_id = %workout.id(),
            kind = %workout.kind(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout created"
        );

        if self.map_ready {
            self.map
                .add_marker(workout.location(), &MarkerPopup::from(&workout));
        }
        self.view.render_list_row(&WorkoutSummary::from(&workout));
        self.view.clear_form();
        self.view.hide_form();

        self.workouts.push(workout);
        self.pending_location = None;
        self.persist();

        let index = self.workouts.len() - 1;
        Ok(&self.workouts[index])
    }

    /// Center the map on a listed workout and count the selection.
    ///
    /// Ids not in the collection are ignored.
    pub fn on_workout_selected(&mut self, id: &WorkoutId) -> Option<&Workout> {
        let Some(index) = self.workouts.iter().position(|w| w.id() == id) else {
            tracing::debug!(workout_id = %id, "Ignoring selection of unknown workout");
            return None;
        };

        if self.map_ready {
            self.map
                .pan_to(self.workouts[index].location(), self.settings.map_zoom);
        }
        self.workouts[index].activate();
        tracing::debug!(
            workout_id = %id,
            interactions = self.workouts[index].interaction_count(),
            "Workout selected"
        );

        if self.settings.persist_selections {
            self.persist();
        }
        Some(&self.workouts[index])
    }

    /// Switch the form between the cadence and elevation fields.
    pub fn toggle_input_mode_hint(&mut self) {
        self.view.toggle_field(FormField::Cadence);
        self.view.toggle_field(FormField::Elevation);
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn pending_location(&self) -> Option<Location> {
        self.pending_location
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn db(&self) -> &WorkoutDb<S> {
        &self.db
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // ─── Helpers ─────────────────────────────────────────────────

    fn render_all_markers(&mut self) {
        for workout in &self.workouts {
            self.map
                .add_marker(workout.location(), &MarkerPopup::from(workout));
        }
    }

    /// Time-derived id, bumped until it is unused in this collection.
    fn next_id(&self, now: DateTime<Utc>) -> WorkoutId {
        let mut millis = now.timestamp_millis();
        loop {
            let id = WorkoutId::from_millis(millis);
            if self.find(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.db.save_workouts(&self.workouts) {
            tracing::error!(error = %e, "Failed to save workouts");
            self.view.alert(&e.user_message());
        }
    }

    fn reject(&mut self, err: AppError) -> AppError {
        tracing::info!(error = %err, "Rejected workout submission");
        self.view.alert(&err.user_message());
        err
    }
}
