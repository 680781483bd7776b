// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - family API access and request-independent logic.

pub mod dashboard;
pub mod family_api;
pub mod query_parser;

pub use dashboard::{load_dashboard, load_leaderboard, DashboardSnapshot, Section};
pub use family_api::FamilyApiClient;
pub use query_parser::{parse_query, SearchFilters};
