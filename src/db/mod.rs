// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer (string-keyed key-value store).

pub mod file_store;
pub mod store;
pub mod workouts;

pub use file_store::FileStore;
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use workouts::WorkoutDb;

/// Storage keys as constants.
pub mod keys {
    /// Serialized workout collection
    pub const WORKOUTS: &str = "workouts";
}
