// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Maptrack: log runs and rides on a map
//!
//! This crate provides the workout model and the session controller that
//! validates entries, renders them through map/list collaborators, and keeps
//! the collection in a key-value store.

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod ui;
