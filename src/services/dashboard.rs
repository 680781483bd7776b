// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard loading: the points balance, leaderboard and history fetches
//! a widget issues when it is first shown.
//!
//! The three calls run concurrently and land independently. A failure in one
//! section is recorded in that section only.

use crate::error::AppError;
use crate::models::{HistoryEvent, LeaderboardEntry, PointsBalance};
use crate::services::FamilyApiClient;
use crate::time_utils::now_rfc3339;
use serde::{Serialize, Serializer};

/// Outcome of one independently fetched part of a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Loaded(T),
    Failed(String),
}

impl<T> Section<T> {
    /// Wrap a fetch result, logging a failure under `name`. Only the
    /// caller-safe part of the error is kept.
    pub fn from_result(name: &'static str, result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Section::Loaded(value),
            Err(e) => {
                tracing::warn!(section = name, error = %e, "Widget section failed to load");
                Section::Failed(e.public_message())
            }
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            Section::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

/// Loaded sections serialize as their value, failed ones as `{"error": ...}`.
impl<T: Serialize> Serialize for Section<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Failure<'a> {
            error: &'a str,
        }

        match self {
            Section::Loaded(value) => value.serialize(serializer),
            Section::Failed(msg) => Failure { error: msg }.serialize(serializer),
        }
    }
}

/// Everything the dashboard shows on first render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub points: Section<PointsBalance>,
    pub leaderboard: Section<Vec<LeaderboardEntry>>,
    pub history: Section<Vec<HistoryEvent>>,
    pub fetched_at: String,
}

/// Leaderboard widget data (no balance).
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardSnapshot {
    pub leaderboard: Section<Vec<LeaderboardEntry>>,
    pub history: Section<Vec<HistoryEvent>>,
}

/// Fetch balance, leaderboard and history concurrently.
pub async fn load_dashboard(client: &FamilyApiClient) -> DashboardSnapshot {
    let (points, leaderboard, history) = tokio::join!(
        client.points_balance(),
        client.leaderboard(),
        client.points_history(),
    );

    DashboardSnapshot {
        points: Section::from_result("points", points),
        leaderboard: Section::from_result("leaderboard", leaderboard),
        history: Section::from_result("history", history),
        fetched_at: now_rfc3339(),
    }
}

/// Fetch leaderboard and history concurrently.
pub async fn load_leaderboard(client: &FamilyApiClient) -> LeaderboardSnapshot {
    let (leaderboard, history) = tokio::join!(client.leaderboard(), client.points_history());

    LeaderboardSnapshot {
        leaderboard: Section::from_result("leaderboard", leaderboard),
        history: Section::from_result("history", history),
    }
}
