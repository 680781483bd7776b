// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Family dashboard and leaderboard widgets.

use super::finder::search_form;
use super::{activity_line, escape, history_line, leaderboard_line, notice, page, FinderForm};
use crate::models::{Activity, HistoryEvent, LeaderboardEntry, RedeemOutcome};
use crate::services::dashboard::{DashboardSnapshot, LeaderboardSnapshot, Section};

/// Type shown for an activity without one.
const FALLBACK_TYPE: &str = "activity";

pub struct DashboardView<'a> {
    pub snapshot: &'a DashboardSnapshot,
    pub form: &'a FinderForm,
    /// `None` until "Find Activities" was pressed
    pub activities: Option<&'a Section<Vec<Activity>>>,
}

/// Render the full dashboard widget.
pub fn dashboard_page(view: &DashboardView<'_>) -> String {
    let mut body = String::from("<h2>🎯 ScoutFox Family Dashboard</h2>\n");

    match &view.snapshot.points {
        Section::Loaded(balance) => body.push_str(&format!(
            "<p><strong>Your Points:</strong> {}</p>\n",
            balance.points
        )),
        Section::Failed(msg) => body.push_str(&notice(&format!("Points unavailable: {}", msg))),
    }

    body.push_str(&search_form("/widgets/dashboard", view.form, false));

    match view.activities {
        None => {}
        Some(Section::Failed(msg)) => {
            body.push_str(&notice(&format!("Activities unavailable: {}", msg)));
        }
        Some(Section::Loaded(activities)) => body.push_str(&bookable_list(activities)),
    }

    body.push_str(
        "<form method=\"post\" action=\"/widgets/upgrade\">\
         <button type=\"submit\" class=\"upgrade\">⭐ Upgrade to Pro</button></form>\n",
    );
    body.push_str(
        "<form method=\"post\" action=\"/widgets/checkin\">\
         <button type=\"submit\">✅ Daily check-in</button></form>\n",
    );
    body.push_str(
        "<form method=\"post\" action=\"/widgets/redeem\">\
         <input type=\"number\" name=\"cost\" min=\"1\" required>\
         <button type=\"submit\">🎁 Redeem points</button></form>\n",
    );

    body.push_str("<h3>🏆 Leaderboard</h3>\n");
    body.push_str(&leaderboard_list(&view.snapshot.leaderboard));
    body.push_str("<h3>📜 Your Recent Activity</h3>\n");
    body.push_str(&history_list(&view.snapshot.history));

    page("ScoutFox Family Dashboard", &body)
}

/// Render the standalone leaderboard widget.
pub fn leaderboard_page(snapshot: &LeaderboardSnapshot) -> String {
    let mut body = String::from("<h2>🏆 Family Leaderboard</h2>\n");
    body.push_str(&leaderboard_list(&snapshot.leaderboard));
    body.push_str("<h3>📜 Your Activity</h3>\n");
    body.push_str(&history_list(&snapshot.history));
    page("Family Leaderboard", &body)
}

/// Render the outcome of a points redemption.
pub fn redeem_page(outcome: &RedeemOutcome) -> String {
    let mut body = String::from("<h2>🎁 Redeem Points</h2>\n");
    match outcome {
        RedeemOutcome::Redeemed { points, message } => {
            body.push_str(&format!(
                "<p>{}</p>\n<p><strong>Your Points:</strong> {}</p>\n",
                escape(message),
                points
            ));
        }
        RedeemOutcome::Rejected { error } => body.push_str(&notice(error)),
    }
    body.push_str("<p><a href=\"/widgets/dashboard\">Back to dashboard</a></p>\n");
    page("Redeem Points", &body)
}

fn bookable_list(activities: &[Activity]) -> String {
    let mut html = String::from("<ul>\n");
    for (index, activity) in activities.iter().enumerate() {
        let id = activity.booking_id(index).to_string();
        html.push_str(&format!(
            "<li>{}<form class=\"inline\" method=\"post\" action=\"/widgets/book/{}\">\
             <button type=\"submit\">Book Now</button></form></li>\n",
            escape(&activity_line(activity, FALLBACK_TYPE)),
            escape(&urlencoding::encode(&id)),
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn leaderboard_list(section: &Section<Vec<LeaderboardEntry>>) -> String {
    match section {
        Section::Failed(msg) => notice(&format!("Leaderboard unavailable: {}", msg)),
        Section::Loaded(entries) => {
            let mut html = String::from("<ol>\n");
            for entry in entries {
                html.push_str(&format!("<li>{}</li>\n", escape(&leaderboard_line(entry))));
            }
            html.push_str("</ol>\n");
            html
        }
    }
}

fn history_list(section: &Section<Vec<HistoryEvent>>) -> String {
    match section {
        Section::Failed(msg) => notice(&format!("History unavailable: {}", msg)),
        Section::Loaded(events) => {
            let mut html = String::from("<ul>\n");
            for event in events {
                html.push_str(&format!("<li>{}</li>\n", escape(&history_line(event))));
            }
            html.push_str("</ul>\n");
            html
        }
    }
}
