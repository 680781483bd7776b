// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Security headers middleware.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};

/// Widgets may be framed by the frontend, use inline styles and post forms
/// that redirect off-site (affiliate partner, checkout). Scripts never run.
const BASE_CSP: &str =
    "default-src 'none'; style-src 'unsafe-inline'; form-action 'self' https:; frame-ancestors 'self'";

/// Precomputed header values shared by every response.
#[derive(Clone)]
pub struct SecurityHeaders {
    csp: HeaderValue,
}

impl SecurityHeaders {
    /// Allow `frontend_url` to embed the widgets.
    pub fn for_frontend(frontend_url: &str) -> Self {
        let csp = HeaderValue::from_str(&format!("{} {}", BASE_CSP, frontend_url))
            .unwrap_or_else(|_| {
                tracing::warn!(frontend_url, "Frontend URL unusable in CSP, framing limited to self");
                HeaderValue::from_static(BASE_CSP)
            });
        Self { csp }
    }
}

/// Add security headers to all responses.
pub async fn add_security_headers(
    State(policy): State<SecurityHeaders>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        "Strict-Transport-Security",
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert("Content-Security-Policy", policy.csp.clone());
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("no-referrer"),
    );
    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("accelerometer=(), camera=(), geolocation=(), gyroscope=(), magnetometer=(), microphone=(), usb=()"),
    );

    response
}
