// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Family API client for recommendations, points and checkout.
//!
//! Every call is a single request carrying the `X-API-Key` header. There is
//! no retry or caching here; callers decide what a failure means for them.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{
    Activity, ActivityId, BookingResult, CheckoutSession, EarnResult, HistoryEvent,
    LeaderboardEntry, PointsBalance, PointsHistory, RecommendQuery, RedeemOutcome,
};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Header the family API reads the caller's key from.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Family API client.
#[derive(Clone)]
pub struct FamilyApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FamilyApiClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            &config.family_api_url,
            &config.family_api_key,
            config.family_api_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Recommendations ─────────────────────────────────────────────────────

    /// Recommended activities for a state, optionally filtered by setting.
    pub async fn recommend(&self, query: &RecommendQuery) -> Result<Vec<Activity>, AppError> {
        tracing::debug!(
            state = %query.state,
            limit = query.limit,
            indoor = ?query.indoor,
            "Fetching recommendations"
        );

        let response = self
            .http
            .get(self.url("/recommend"))
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::FamilyApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    // ─── Points ──────────────────────────────────────────────────────────────

    pub async fn points_balance(&self) -> Result<PointsBalance, AppError> {
        self.get_json("/points/points_balance").await
    }

    /// Leaderboard, ranked by the family API.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        self.get_json("/points/leaderboard").await
    }

    /// Points history, unwrapped from its `{ history }` envelope.
    pub async fn points_history(&self) -> Result<Vec<HistoryEvent>, AppError> {
        let envelope: PointsHistory = self.get_json("/points/points_history").await?;
        Ok(envelope.history)
    }

    /// Book an activity through the affiliate partner.
    pub async fn book_activity(&self, activity_id: &ActivityId) -> Result<BookingResult, AppError> {
        tracing::info!(activity_id = %activity_id, "Booking activity");
        self.post_json(
            "/points/book_activity",
            &[("activity_id", activity_id.to_string())],
        )
        .await
    }

    /// Record a points-earning event such as `daily_checkin`.
    pub async fn earn_points(&self, event: &str) -> Result<EarnResult, AppError> {
        self.post_json("/points/earn_points", &[("event", event.to_string())])
            .await
    }

    /// Spend points. A refusal comes back as `RedeemOutcome::Rejected`.
    pub async fn redeem_points(&self, cost: u32) -> Result<RedeemOutcome, AppError> {
        self.post_json("/points/redeem_points", &[("cost", cost.to_string())])
            .await
    }

    // ─── Payments ────────────────────────────────────────────────────────────

    /// Start a Pro subscription checkout.
    pub async fn create_checkout_session(&self) -> Result<CheckoutSession, AppError> {
        self.post_json("/payments/create-checkout-session", &[])
            .await
    }

    // ─── Plumbing ────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::FamilyApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// POST with query parameters and an empty JSON body.
    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .query(params)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| AppError::FamilyApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                tracing::warn!(status = status.as_u16(), "Family API rejected API key");
                return Err(AppError::FamilyApiAuth(format!("HTTP {}: {}", status, body)));
            }

            return Err(AppError::FamilyApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::FamilyApi(format!("JSON parse error: {}", e)))
    }
}
