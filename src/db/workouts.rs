// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed access to the persisted workout collection.
//!
//! The collection is always read and written as a whole under
//! [`keys::WORKOUTS`]. Reads never fail: missing or unreadable data is an
//! empty collection.

use crate::db::keys;
use crate::db::store::KeyValueStore;
use crate::error::{AppError, Result};
use crate::models::Workout;
use std::collections::HashSet;

/// Workout persistence on top of a key-value store.
#[derive(Debug, Clone)]
pub struct WorkoutDb<S> {
    store: S,
}

impl<S: KeyValueStore> WorkoutDb<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the stored collection in creation order.
    ///
    /// Any read or decode failure is logged and yields an empty collection.
    pub fn load_workouts(&self) -> Vec<Workout> {
        match self.try_load_workouts() {
            Ok(workouts) => {
                tracing::debug!(count = workouts.len(), "Loaded stored workouts");
                workouts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring stored workouts");
                Vec::new()
            }
        }
    }

    fn try_load_workouts(&self) -> Result<Vec<Workout>> {
        let Some(raw) = self
            .store
            .get(keys::WORKOUTS)
            .map_err(|e| AppError::PersistenceRead(e.to_string()))?
        else {
            return Ok(Vec::new());
        };

        let stored: Vec<Workout> =
            serde_json::from_str(&raw).map_err(|e| AppError::PersistenceRead(e.to_string()))?;

        // Ids must stay unique; first occurrence wins
        let mut seen = HashSet::new();
        let mut workouts = Vec::with_capacity(stored.len());
        for workout in stored {
            if seen.insert(workout.id().clone()) {
                workouts.push(workout);
            } else {
                tracing::warn!(workout_id = %workout.id(), "Dropping duplicate stored workout");
            }
        }

        Ok(workouts)
    }

    /// Overwrite the stored collection with `workouts`.
    pub fn save_workouts(&mut self, workouts: &[Workout]) -> Result<()> {
        let json = serde_json::to_string(workouts)
            .map_err(|e| AppError::Storage(format!("Failed to encode workouts: {}", e)))?;
        self.store.set(keys::WORKOUTS, &json)?;

        tracing::debug!(count = workouts.len(), "Saved workouts");
        Ok(())
    }

    /// Erase the stored collection.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(keys::WORKOUTS)?;
        tracing::info!("Cleared stored workouts");
        Ok(())
    }
}
