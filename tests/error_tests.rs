// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use maptrack::db::StoreError;
use maptrack::error::AppError;

#[test]
fn test_user_correctable_errors() {
    assert!(AppError::InvalidInput("distance must be positive".to_string()).is_user_correctable());
    assert!(AppError::NoLocationSelected.is_user_correctable());

    assert!(!AppError::GeolocationUnavailable("denied".to_string()).is_user_correctable());
    assert!(!AppError::PersistenceRead("bad json".to_string()).is_user_correctable());
    assert!(!AppError::Storage("disk full".to_string()).is_user_correctable());
}

#[test]
fn test_user_messages_hide_details() {
    let err = AppError::InvalidInput("cadence must be positive, got -1".to_string());
    assert_eq!(err.user_message(), AppError::INVALID_INPUT_ALERT);
    assert!(err.to_string().contains("cadence"));

    let err = AppError::Storage("permission denied".to_string());
    assert!(!err.user_message().contains("permission"));
}

#[test]
fn test_store_error_converts_to_storage() {
    let err: AppError = StoreError::WriteError("disk full".to_string()).into();
    assert!(matches!(err, AppError::Storage(ref msg) if msg.contains("disk full")));
}
