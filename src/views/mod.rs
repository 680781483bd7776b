// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-side rendering of the family widgets.
//!
//! Renderers are pure functions from fetched data to HTML. Everything that
//! came from the family API goes through [`escape`].

pub mod chat;
pub mod dashboard;
pub mod finder;

pub use chat::chat_reply;
pub use dashboard::{dashboard_page, leaderboard_page, redeem_page, DashboardView};
pub use finder::{finder_page, FinderForm, FinderView};

use crate::models::{Activity, HistoryEvent, LeaderboardEntry};

/// Placeholder for a missing activity field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `"<name> — <type>"`, using `fallback_type` when the type is missing.
pub fn activity_line(activity: &Activity, fallback_type: &str) -> String {
    format!(
        "{} — {}",
        activity.name,
        activity
            .activity_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback_type)
    )
}

/// `"<badge> <user> — <points> pts (<tier>)"`.
pub fn leaderboard_line(entry: &LeaderboardEntry) -> String {
    let who = if entry.badge.is_empty() {
        entry.user.clone()
    } else {
        format!("{} {}", entry.badge, entry.user)
    };
    format!("{} — {} pts ({})", who, entry.points, entry.tier)
}

/// One line of the points history.
pub fn history_line(event: &HistoryEvent) -> String {
    if event.is_booking() {
        let activity = event
            .activity_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default();
        return format!("Booked activity {} +{} pts", activity, event.points);
    }

    if event.points > 0 {
        format!("{} +{} pts", event.event, event.points)
    } else {
        format!("{} {} pts", event.event, event.points)
    }
}

/// Field value or `N/A`.
pub fn or_not_available(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;padding:20px;background:#fff}\
.widget{border:2px solid #eee;padding:20px;border-radius:12px;max-width:700px;margin:auto;background:#fafafa}\
.card{padding:15px;margin:10px 0;background:#f9f9f9;border-radius:8px;box-shadow:0 1px 5px rgba(0,0,0,.1)}\
.card h4{font-size:18px;margin:0 0 6px}\
.notice{color:#a40000}\
.upgrade{background:gold;padding:12px;border-radius:8px;border:none;font-weight:bold;cursor:pointer;margin-top:20px}\
form.inline{display:inline;margin-left:10px}";

/// Wrap widget markup in a complete HTML document.
pub(crate) fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"widget\">\n{}</div>\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// Page shown when a widget action (book, upgrade, ...) fails.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h2>Something went wrong</h2>\n{}<p><a href=\"/widgets/dashboard\">Back to dashboard</a></p>\n",
        notice(message)
    );
    page("Something went wrong", &body)
}

/// Paragraph shown in place of a section that failed to load.
pub(crate) fn notice(message: &str) -> String {
    format!("<p class=\"notice\">{}</p>\n", escape(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityId;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("Griffith Park"), "Griffith Park");
    }

    #[test]
    fn test_activity_line_fallback() {
        let activity = Activity {
            name: "Discovery Cube".to_string(),
            ..Default::default()
        };
        assert_eq!(activity_line(&activity, "activity"), "Discovery Cube — activity");

        let activity = Activity {
            activity_type: Some("museum".to_string()),
            ..activity
        };
        assert_eq!(activity_line(&activity, "activity"), "Discovery Cube — museum");
    }

    #[test]
    fn test_leaderboard_line() {
        let entry = LeaderboardEntry {
            user: "demo_pro_key".to_string(),
            badge: "⭐".to_string(),
            tier: "pro".to_string(),
            points: 140,
        };
        assert_eq!(leaderboard_line(&entry), "⭐ demo_pro_key — 140 pts (pro)");

        let entry = LeaderboardEntry {
            badge: String::new(),
            tier: "free".to_string(),
            ..entry
        };
        assert_eq!(leaderboard_line(&entry), "demo_pro_key — 140 pts (free)");
    }

    #[test]
    fn test_history_line() {
        let booking = HistoryEvent {
            event: "affiliate_booking".to_string(),
            points: 20,
            activity_id: Some(ActivityId::Number(12)),
        };
        assert_eq!(history_line(&booking), "Booked activity 12 +20 pts");

        let checkin = HistoryEvent {
            event: "daily_checkin".to_string(),
            points: 10,
            activity_id: None,
        };
        assert_eq!(history_line(&checkin), "daily_checkin +10 pts");

        let redeem = HistoryEvent {
            event: "redeem".to_string(),
            points: -30,
            activity_id: None,
        };
        assert_eq!(history_line(&redeem), "redeem -30 pts");

        let nothing = HistoryEvent {
            event: "unknown".to_string(),
            points: 0,
            activity_id: None,
        };
        assert_eq!(history_line(&nothing), "unknown 0 pts");
    }

    #[test]
    fn test_or_not_available() {
        assert_eq!(or_not_available(None), "N/A");
        assert_eq!(or_not_available(Some("")), "N/A");
        assert_eq!(or_not_available(Some("TX")), "TX");
    }
}
