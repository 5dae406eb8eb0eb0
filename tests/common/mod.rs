// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{TimeZone, Utc};
use maptrack::db::{keys, KeyValueStore, MemoryStore, StoreError, WorkoutDb};
use maptrack::models::{
    KindParams, Location, MarkerPopup, NewWorkout, Workout, WorkoutId, WorkoutSummary,
};
use maptrack::services::{SessionController, SessionSettings};
use maptrack::ui::{FormField, MapView, WorkoutView};

pub type TestSession = SessionController<MemoryStore, RecordingMap, RecordingView>;

/// Everything the controller asked the map to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Shown(Location, u8),
    Marker(Location, MarkerPopup),
    Panned(Location, u8),
    Cleared,
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub events: Vec<MapEvent>,
}

#[allow(dead_code)]
impl RecordingMap {
    pub fn markers(&self) -> Vec<&MarkerPopup> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MapEvent::Marker(_, popup) => Some(popup),
                _ => None,
            })
            .collect()
    }
}

impl MapView for RecordingMap {
    fn show_map(&mut self, center: Location, zoom: u8) {
        self.events.push(MapEvent::Shown(center, zoom));
    }

    fn add_marker(&mut self, location: Location, popup: &MarkerPopup) {
        self.events.push(MapEvent::Marker(location, popup.clone()));
    }

    fn pan_to(&mut self, location: Location, zoom: u8) {
        self.events.push(MapEvent::Panned(location, zoom));
    }

    fn clear_markers(&mut self) {
        self.events.push(MapEvent::Cleared);
    }
}

/// Everything the controller asked the list/form to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Row(WorkoutSummary),
    ListCleared,
    FormShown,
    FormHidden,
    FormCleared,
    Toggled(FormField),
    Alert(String),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn rows(&self) -> Vec<&WorkoutSummary> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Row(row) => Some(row),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl WorkoutView for RecordingView {
    fn render_list_row(&mut self, row: &WorkoutSummary) {
        self.events.push(ViewEvent::Row(row.clone()));
    }

    fn clear_list(&mut self) {
        self.events.push(ViewEvent::ListCleared);
    }

    fn show_form(&mut self) {
        self.events.push(ViewEvent::FormShown);
    }

    fn hide_form(&mut self) {
        self.events.push(ViewEvent::FormHidden);
    }

    fn clear_form(&mut self) {
        self.events.push(ViewEvent::FormCleared);
    }

    fn toggle_field(&mut self, field: FormField) {
        self.events.push(ViewEvent::Toggled(field));
    }

    fn alert(&mut self, message: &str) {
        self.events.push(ViewEvent::Alert(message.to_string()));
    }
}

/// Store that can be read but rejects every write, like a full or
/// read-only disk.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::WriteError("disk full".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::WriteError("disk full".to_string()))
    }
}

/// Create a session whose storage rejects writes, seeded with `workouts`.
#[allow(dead_code)]
pub fn failing_session(
    workouts: &[Workout],
) -> SessionController<FailingStore, RecordingMap, RecordingView> {
    SessionController::new(
        WorkoutDb::new(FailingStore {
            inner: seeded_store(workouts),
        }),
        RecordingMap::default(),
        RecordingView::default(),
        SessionSettings::default(),
    )
}

/// Location used across tests.
#[allow(dead_code)]
pub fn here() -> Location {
    Location::new(39.0, -12.0)
}

/// Create a session on top of `store` with default settings.
#[allow(dead_code)]
pub fn session_with_store(store: MemoryStore) -> TestSession {
    session_with_settings(store, SessionSettings::default())
}

#[allow(dead_code)]
pub fn session_with_settings(store: MemoryStore, settings: SessionSettings) -> TestSession {
    SessionController::new(
        WorkoutDb::new(store),
        RecordingMap::default(),
        RecordingView::default(),
        settings,
    )
}

/// Create an initialized session with empty storage.
#[allow(dead_code)]
pub fn test_session() -> TestSession {
    let mut session = session_with_store(MemoryStore::new());
    session.initialize();
    session
}

/// Store pre-seeded with a serialized collection.
#[allow(dead_code)]
pub fn seeded_store(workouts: &[Workout]) -> MemoryStore {
    let json = serde_json::to_string(workouts).expect("Failed to encode workouts");
    MemoryStore::with_entry(keys::WORKOUTS, &json)
}

/// Build a workout with a fixed id so several can be created in one
/// millisecond without colliding.
#[allow(dead_code)]
pub fn workout_with_id(id: &str, location: Location, params: KindParams) -> Workout {
    let created_at = Utc
        .with_ymd_and_hms(2024, 4, 14, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Workout::with_id(
        WorkoutId::from(id),
        NewWorkout {
            distance_km: 12.5,
            duration_min: 48.0,
            location,
            params,
        },
        created_at,
    )
}
