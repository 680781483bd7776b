// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ScoutFox widgets: family activity finder, points dashboard and
//! leaderboard, rendered server-side on top of the family API.
//!
//! The family API owns recommendations, points, bookings and payments.
//! This crate fetches from it and renders what it returns.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod views;

use config::Config;
use services::FamilyApiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub family_api: FamilyApiClient,
}
