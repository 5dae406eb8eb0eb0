// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing messages.

use crate::db::StoreError;

/// Application error type.
///
/// Input errors are user-correctable and never fatal; the controller shows
/// them through the view and leaves its state untouched.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No location selected on the map")]
    NoLocationSelected,

    #[error("Geolocation unavailable: {0}")]
    GeolocationUnavailable(String),

    #[error("Stored workouts could not be read: {0}")]
    PersistenceRead(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Alert text shown for invalid form input.
    pub const INVALID_INPUT_ALERT: &'static str = "Inputs have to be positive numbers!";

    /// Message shown to the user in a blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(_) => Self::INVALID_INPUT_ALERT.to_string(),
            AppError::NoLocationSelected => {
                "Click on the map to choose where the workout happened".to_string()
            }
            AppError::GeolocationUnavailable(_) => {
                "Couldn't get your current position".to_string()
            }
            AppError::PersistenceRead(_) => "Stored workouts could not be loaded".to_string(),
            AppError::Storage(_) => "Workouts could not be saved".to_string(),
        }
    }

    /// Whether the user can fix this by changing what they entered.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_) | AppError::NoLocationSelected
        )
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, AppError>;
