// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-rendered widget pages and their form actions.
//!
//! Page loads render every section they could fetch. Actions redirect the
//! browser to wherever the family API points it (affiliate partner, hosted
//! checkout) or back to the dashboard.

use super::{validated, BookPath, RedeemParams};
use crate::error::AppError;
use crate::models::points::DAILY_CHECKIN_EVENT;
use crate::models::FinderParams;
use crate::services::dashboard::{load_dashboard, load_leaderboard, Section};
use crate::views::{self, DashboardView, FinderForm, FinderView};
use crate::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/widgets/finder", get(finder))
        .route("/widgets/dashboard", get(dashboard))
        .route("/widgets/leaderboard", get(leaderboard))
        .route("/widgets/book/{activity_id}", post(book))
        .route("/widgets/upgrade", post(upgrade))
        .route("/widgets/checkin", post(checkin))
        .route("/widgets/redeem", post(redeem))
}

/// Widget failure rendered as an HTML page instead of JSON.
pub struct WidgetError(AppError);

impl From<AppError> for WidgetError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for WidgetError {
    fn from(rejection: QueryRejection) -> Self {
        Self(rejection.into())
    }
}

impl From<FormRejection> for WidgetError {
    fn from(rejection: FormRejection) -> Self {
        Self(rejection.into())
    }
}

impl IntoResponse for WidgetError {
    fn into_response(self) -> Response {
        let message = self.0.public_message();
        (self.0.status_code(), Html(views::error_page(&message))).into_response()
    }
}

type WidgetResult<T> = std::result::Result<T, WidgetError>;

// ─── Pages ───────────────────────────────────────────────────

/// Activities finder. Without a `state` only the form is shown.
async fn finder(
    State(state): State<Arc<AppState>>,
    params: Result<Query<FinderParams>, QueryRejection>,
) -> WidgetResult<Html<String>> {
    let Query(params) = params?;
    let query = params.to_query(state.config.default_limit)?;
    let form = FinderForm::new(
        query.as_ref(),
        &state.config.default_state,
        state.config.default_limit,
    );

    let results = match &query {
        Some(q) => Some(Section::from_result(
            "activities",
            state.family_api.recommend(q).await,
        )),
        None => None,
    };

    Ok(Html(views::finder_page(&FinderView {
        form: &form,
        results: results.as_ref(),
    })))
}

/// Family dashboard: balance, leaderboard and history, plus the activity
/// list when a `state` was submitted.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    params: Result<Query<FinderParams>, QueryRejection>,
) -> WidgetResult<Html<String>> {
    let Query(params) = params?;
    let query = params.to_query(state.config.default_limit)?;
    let form = FinderForm::new(
        query.as_ref(),
        &state.config.default_state,
        state.config.default_limit,
    );

    let (snapshot, activities) = tokio::join!(load_dashboard(&state.family_api), async {
        match &query {
            Some(q) => Some(Section::from_result(
                "activities",
                state.family_api.recommend(q).await,
            )),
            None => None,
        }
    });

    Ok(Html(views::dashboard_page(&DashboardView {
        snapshot: &snapshot,
        form: &form,
        activities: activities.as_ref(),
    })))
}

async fn leaderboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = load_leaderboard(&state.family_api).await;
    Html(views::leaderboard_page(&snapshot))
}

// ─── Actions ─────────────────────────────────────────────────

/// Book an activity, then send the browser to the affiliate partner.
async fn book(
    State(state): State<Arc<AppState>>,
    Path(path): Path<BookPath>,
) -> WidgetResult<Redirect> {
    let path = validated(path)?;
    let result = state.family_api.book_activity(&path.activity_id()).await?;

    tracing::info!(
        activity_id = %path.activity_id,
        earned_points = result.earned_points,
        total_points = result.total_points,
        "Booking created"
    );

    Ok(Redirect::to(&result.affiliate_link))
}

/// Start a Pro checkout and send the browser to the hosted page.
async fn upgrade(State(state): State<Arc<AppState>>) -> WidgetResult<Redirect> {
    let session = state.family_api.create_checkout_session().await?;
    tracing::info!("Checkout session created");
    Ok(Redirect::to(&session.checkout_url))
}

async fn checkin(State(state): State<Arc<AppState>>) -> WidgetResult<Redirect> {
    let result = state.family_api.earn_points(DAILY_CHECKIN_EVENT).await?;
    tracing::info!(
        earned = result.earned,
        total_points = result.total_points,
        "Daily check-in recorded"
    );
    Ok(Redirect::to("/widgets/dashboard"))
}

/// Redeem points. A refusal from the family API is a normal outcome.
async fn redeem(
    State(state): State<Arc<AppState>>,
    params: Result<Form<RedeemParams>, FormRejection>,
) -> WidgetResult<Html<String>> {
    let Form(params) = params?;
    let params = validated(params)?;
    let outcome = state.family_api.redeem_points(params.cost).await?;
    Ok(Html(views::redeem_page(&outcome)))
}
