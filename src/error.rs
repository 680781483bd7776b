// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Shown in place of details that must not reach the caller.
pub const UNAVAILABLE_MESSAGE: &str = "The family service is unavailable right now.";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The family API refused our API key (401/403).
    #[error("Family API rejected credentials: {0}")]
    FamilyApiAuth(String),

    #[error("Family API error: {0}")]
    FamilyApi(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Check if this error means the configured API key is unusable.
    pub fn is_family_api_auth_error(&self) -> bool {
        match self {
            AppError::FamilyApiAuth(_) => true,
            AppError::FamilyApi(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.contains("api key") || msg.contains("insufficient tier")
            }
            _ => false,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::FamilyApiAuth(_) | AppError::FamilyApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code for response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::FamilyApiAuth(_) => "family_api_auth",
            AppError::FamilyApi(_) => "family_api_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Detail safe to show to the caller. Credential and internal failures
    /// are logged instead.
    pub fn public_details(&self) -> Option<String> {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::FamilyApi(msg) => {
                Some(msg.clone())
            }
            AppError::FamilyApiAuth(msg) => {
                tracing::error!(error = %msg, "Family API rejected the configured key");
                None
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                None
            }
        }
    }
}

impl AppError {
    /// Caller-facing message: the public details, or a generic notice when
    /// those are withheld.
    pub fn public_message(&self) -> String {
        self.public_details()
            .unwrap_or_else(|| UNAVAILABLE_MESSAGE.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            details: self.public_details(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
