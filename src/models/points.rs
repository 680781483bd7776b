// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Points, leaderboard and booking records from the `/points` endpoints.

use crate::models::ActivityId;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// History event name recorded for an affiliate booking.
pub const AFFILIATE_BOOKING_EVENT: &str = "affiliate_booking";

/// Event name for the daily check-in reward.
pub const DAILY_CHECKIN_EVENT: &str = "daily_checkin";

/// Reply of `GET /points/points_balance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PointsBalance {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
}

/// One row of `GET /points/leaderboard`, already ranked upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub user: String,
    /// Emoji badge; empty for the free tier
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub tier: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
}

/// A points ledger entry. Redemptions carry negative points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryEvent {
    pub event: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<ActivityId>,
}

impl HistoryEvent {
    pub fn is_booking(&self) -> bool {
        self.event == AFFILIATE_BOOKING_EVENT
    }
}

/// Envelope of `GET /points/points_history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointsHistory {
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
}

/// Reply of `POST /points/book_activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BookingResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Outbound partner URL the user completes the booking on
    pub affiliate_link: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub earned_points: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: i64,
}

/// Reply of `POST /points/earn_points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EarnResult {
    pub event: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub earned: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: i64,
}

/// Reply of `POST /points/redeem_points`.
///
/// The upstream answers HTTP 200 in both cases and signals a refusal
/// (e.g. not enough points) through an `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(untagged)]
pub enum RedeemOutcome {
    Redeemed {
        #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
        points: i64,
        #[serde(default)]
        message: String,
    },
    Rejected {
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_event_with_and_without_activity() {
        let json = r#"[
            {"event": "affiliate_booking", "points": 20, "activity_id": "park-1"},
            {"event": "redeem", "points": -30}
        ]"#;
        let events: Vec<HistoryEvent> = serde_json::from_str(json).unwrap();
        assert!(events[0].is_booking());
        assert_eq!(events[0].activity_id, Some(ActivityId::from("park-1")));
        assert!(!events[1].is_booking());
        assert_eq!(events[1].points, -30);
    }

    #[test]
    fn test_points_history_missing_field_is_empty() {
        let history: PointsHistory = serde_json::from_str("{}").unwrap();
        assert!(history.history.is_empty());
    }

    #[test]
    fn test_leaderboard_entry_empty_badge() {
        let json = r#"{"user": "demo_free_key", "points": 50, "tier": "free", "badge": ""}"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.badge, "");
        assert_eq!(entry.points, 50);
    }

    #[test]
    fn test_redeem_outcome_variants() {
        let ok: RedeemOutcome =
            serde_json::from_str(r#"{"points": 90, "message": "Redeemed successfully"}"#).unwrap();
        assert_eq!(
            ok,
            RedeemOutcome::Redeemed {
                points: 90,
                message: "Redeemed successfully".to_string()
            }
        );

        let rejected: RedeemOutcome =
            serde_json::from_str(r#"{"error": "Not enough points"}"#).unwrap();
        assert_eq!(
            rejected,
            RedeemOutcome::Rejected {
                error: "Not enough points".to_string()
            }
        );
    }
}
