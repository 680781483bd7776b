// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod api;
pub mod widgets;

use crate::error::{AppError, Result};
use crate::middleware::security::{add_security_headers, SecurityHeaders};
use crate::models::ActivityId;
use crate::AppState;
use axum::http::{header, Method, Uri};
use axum::{middleware, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Unknown paths get the JSON `not_found` error.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let security = SecurityHeaders::for_frontend(&state.config.frontend_url);

    Router::new()
        .route("/health", get(health_check))
        .merge(widgets::routes())
        .merge(api::routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(security, add_security_headers))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

// ─── Shared request parameters ───────────────────────────────

/// Run `validator` rules and map failures to a 400.
pub(crate) fn validated<T: Validate>(value: T) -> Result<T> {
    value
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(value)
}

/// `{activity_id}` path segment of the booking routes.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct BookPath {
    #[validate(length(min = 1, max = 100))]
    pub activity_id: String,
}

impl BookPath {
    pub fn activity_id(&self) -> ActivityId {
        ActivityId::from(self.activity_id.as_str())
    }
}

/// Points to spend, from a form or query string.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct RedeemParams {
    #[validate(range(min = 1, max = 1_000_000))]
    pub cost: u32,
}
