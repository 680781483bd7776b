// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON routes for apps and chat integrations.
//!
//! These forward to the family API and return its records unchanged, except
//! `/api/dashboard` (concurrent snapshot) and `/api/ask` (free-text search).

use super::{validated, BookPath, RedeemParams};
use crate::error::{AppError, Result};
use crate::models::{
    Activity, BookingResult, CheckoutSession, EarnResult, FinderParams, LeaderboardEntry,
    PointsBalance, PointsHistory, RedeemOutcome,
};
use crate::services::dashboard::{load_dashboard, DashboardSnapshot};
use crate::services::query_parser::{parse_query, SearchFilters, CHAT_LIMIT};
use crate::views::chat_reply;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/recommend", get(recommend))
        .route("/api/ask", get(ask))
        .route("/api/dashboard", get(dashboard))
        .route("/api/points/balance", get(points_balance))
        .route("/api/points/leaderboard", get(leaderboard))
        .route("/api/points/history", get(points_history))
        .route("/api/points/earn", post(earn_points))
        .route("/api/points/redeem", post(redeem_points))
        .route("/api/book/{activity_id}", post(book_activity))
        .route("/api/checkout", post(checkout))
}

// ─── Recommendations ─────────────────────────────────────────

async fn recommend(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<FinderParams>, QueryRejection>,
) -> Result<Json<Vec<Activity>>> {
    let Query(params) = params?;
    let query = params
        .to_query(state.config.default_limit)?
        .ok_or_else(|| AppError::BadRequest("Missing 'state' parameter".to_string()))?;

    Ok(Json(state.family_api.recommend(&query).await?))
}

#[derive(Debug, Deserialize, Validate)]
struct AskQuery {
    #[validate(length(min = 1, max = 500))]
    q: String,
}

/// Free-text search response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AskResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, string | null>"))]
    pub filters: SearchFilters,
    pub results: Vec<Activity>,
    /// Ready-to-post chat message
    pub reply: String,
}

/// Parse a free-text request and recommend matching activities.
async fn ask(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<AskQuery>, QueryRejection>,
) -> Result<Json<AskResponse>> {
    let Query(params) = params?;
    let params = validated(params)?;
    let filters = parse_query(&params.q);

    tracing::debug!(
        state = %filters.state,
        indoor = ?filters.indoor,
        category = ?filters.category,
        "Parsed free-text query"
    );

    let results = state
        .family_api
        .recommend(&filters.to_recommend_query(CHAT_LIMIT)?)
        .await?;
    let reply = chat_reply(&results);

    Ok(Json(AskResponse {
        filters,
        results,
        reply,
    }))
}

// ─── Points ──────────────────────────────────────────────────

/// Balance, leaderboard and history in one call. Each part may fail alone.
async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(load_dashboard(&state.family_api).await)
}

async fn points_balance(State(state): State<Arc<AppState>>) -> Result<Json<PointsBalance>> {
    Ok(Json(state.family_api.points_balance().await?))
}

async fn leaderboard(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LeaderboardEntry>>> {
    Ok(Json(state.family_api.leaderboard().await?))
}

async fn points_history(State(state): State<Arc<AppState>>) -> Result<Json<PointsHistory>> {
    let history = state.family_api.points_history().await?;
    Ok(Json(PointsHistory { history }))
}

#[derive(Debug, Deserialize, Validate)]
struct EarnQuery {
    #[validate(length(min = 1, max = 64))]
    event: String,
}

async fn earn_points(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<EarnQuery>, QueryRejection>,
) -> Result<Json<EarnResult>> {
    let Query(params) = params?;
    let params = validated(params)?;
    Ok(Json(state.family_api.earn_points(&params.event).await?))
}

async fn redeem_points(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<RedeemParams>, QueryRejection>,
) -> Result<Json<RedeemOutcome>> {
    let Query(params) = params?;
    let params = validated(params)?;
    Ok(Json(state.family_api.redeem_points(params.cost).await?))
}

// ─── Booking & checkout ──────────────────────────────────────

async fn book_activity(
    State(state): State<Arc<AppState>>,
    Path(path): Path<BookPath>,
) -> Result<Json<BookingResult>> {
    let path = validated(path)?;
    Ok(Json(
        state.family_api.book_activity(&path.activity_id()).await?,
    ))
}

async fn checkout(State(state): State<Arc<AppState>>) -> Result<Json<CheckoutSession>> {
    Ok(Json(state.family_api.create_checkout_session().await?))
}
