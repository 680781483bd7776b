// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: an in-process stand-in for the family API.

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get, post, MethodRouter},
    Json, Router,
};
use scoutfox_widgets::config::Config;
use scoutfox_widgets::routes::create_router;
use scoutfox_widgets::services::FamilyApiClient;
use scoutfox_widgets::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Key the stub accepts; matches `Config::default()`.
pub const STUB_API_KEY: &str = "demo_pro_key";

/// A request as seen by the stub.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
}

pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Running stub family API.
pub struct StubFamilyApi {
    pub base_url: String,
    log: RequestLog,
}

#[allow(dead_code)]
impl StubFamilyApi {
    /// Start a stub with every endpoint answering normally.
    pub async fn start() -> Self {
        Self::start_with(stub_routes_failing(&[])).await
    }

    /// Start a stub serving `routes` on an ephemeral local port.
    pub async fn start_with(routes: Router) -> Self {
        let log = RequestLog::default();
        let app = routes
            .layer(middleware::from_fn(require_key))
            .layer(middleware::from_fn_with_state(log.clone(), record));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{}", addr),
            log,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap().clone()
    }

    /// Requests made to `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn config(&self) -> Config {
        Config {
            family_api_url: self.base_url.clone(),
            family_api_timeout: Duration::from_secs(2),
            ..Config::default()
        }
    }

    pub fn client(&self) -> FamilyApiClient {
        FamilyApiClient::from_config(&self.config()).expect("client")
    }

    pub fn client_with_key(&self, key: &str) -> FamilyApiClient {
        FamilyApiClient::new(&self.base_url, key, Duration::from_secs(2)).expect("client")
    }

    /// Widget host wired to this stub.
    pub fn app(&self) -> (Router, Arc<AppState>) {
        self.app_with_key(STUB_API_KEY)
    }

    /// Widget host wired to this stub, sending `key` as its API key.
    pub fn app_with_key(&self, key: &str) -> (Router, Arc<AppState>) {
        let config = Config {
            family_api_key: key.to_string(),
            ..self.config()
        };
        let family_api = FamilyApiClient::from_config(&config).expect("client");
        let state = Arc::new(AppState { config, family_api });
        (create_router(state.clone()), state)
    }
}

/// Widget host pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn create_unreachable_app() -> Router {
    let config = Config {
        family_api_url: "http://127.0.0.1:9".to_string(),
        family_api_timeout: Duration::from_secs(1),
        ..Config::default()
    };
    let family_api = FamilyApiClient::from_config(&config).expect("client");
    create_router(Arc::new(AppState { config, family_api }))
}

/// Stub routes; paths in `failing` answer HTTP 500 instead.
pub fn stub_routes_failing(failing: &[&str]) -> Router {
    let routes: Vec<(&str, MethodRouter)> = vec![
        ("/recommend", get(recommend)),
        ("/points/points_balance", get(points_balance)),
        ("/points/leaderboard", get(leaderboard)),
        ("/points/points_history", get(points_history)),
        ("/points/book_activity", post(book_activity)),
        ("/points/earn_points", post(earn_points)),
        ("/points/redeem_points", post(redeem_points)),
        ("/payments/create-checkout-session", post(checkout)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            if failing.contains(&path) {
                router.route(path, any(upstream_failure))
            } else {
                router.route(path, handler)
            }
        })
}

async fn record(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    log.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        api_key: req
            .headers()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    next.run(req).await
}

async fn require_key(req: Request, next: Next) -> Response {
    let key = req.headers().get("x-api-key").and_then(|v| v.to_str().ok());
    if key != Some(STUB_API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid API Key"})),
        )
            .into_response();
    }
    next.run(req).await
}

async fn upstream_failure() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn recommend(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let state = params.get("state").cloned().unwrap_or_default();
    if state == "ZZ" {
        return Json(json!([]));
    }

    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(10);
    let indoor = params.get("indoor");

    let rows = vec![
        json!({"name": "Science Center", "type": "museum", "state": state,
               "indoor_or_outdoor": "indoor", "id": 101, "rating": 4.5}),
        json!({"name": "Harbor Park", "type": "park", "state": state,
               "indoor_or_outdoor": "outdoor", "id": "park-7"}),
        json!({"name": "Story Time Library", "state": state, "indoor_or_outdoor": "indoor"}),
    ];

    let rows: Vec<Value> = rows
        .into_iter()
        .filter(|row| indoor.map_or(true, |i| row["indoor_or_outdoor"] == i.as_str()))
        .take(limit)
        .collect();
    Json(Value::Array(rows))
}

async fn points_balance() -> Json<Value> {
    Json(json!({"points": 120}))
}

async fn leaderboard() -> Json<Value> {
    Json(json!([
        {"user": "demo_business_key", "points": 500, "tier": "business", "badge": "👑"},
        {"user": "demo_pro_key", "points": 120, "tier": "pro", "badge": "⭐"},
        {"user": "demo_free_key", "points": 50, "tier": "free", "badge": ""}
    ]))
}

async fn points_history() -> Json<Value> {
    Json(json!({"history": [
        {"event": "affiliate_booking", "points": 20, "activity_id": "park-7"},
        {"event": "daily_checkin", "points": 10},
        {"event": "redeem", "points": -30}
    ]}))
}

async fn book_activity(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let id = params.get("activity_id").cloned().unwrap_or_default();
    Json(json!({
        "message": "Booking created",
        "affiliate_link": format!("https://partner.scoutfoxtravel.com/book/{}?ref=your_affiliate_id", id),
        "earned_points": 20,
        "total_points": 140
    }))
}

async fn earn_points(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let event = params.get("event").cloned().unwrap_or_default();
    let earned = if event == "daily_checkin" { 10 } else { 0 };
    Json(json!({"event": event, "earned": earned, "total_points": 120 + earned}))
}

async fn redeem_points(Query(params): Query<HashMap<String, i64>>) -> Json<Value> {
    let cost = params.get("cost").copied().unwrap_or(0);
    if cost > 120 {
        return Json(json!({"error": "Not enough points"}));
    }
    Json(json!({"points": 120 - cost, "message": "Redeemed successfully"}))
}

async fn checkout() -> Json<Value> {
    Json(json!({"checkout_url": "https://checkout.stripe.com/c/pay/cs_test_123"}))
}
