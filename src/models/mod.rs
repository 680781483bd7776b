// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wire models of the family API.

pub mod activity;
pub mod checkout;
pub mod points;
pub mod query;

pub use activity::{Activity, ActivityId, Setting};
pub use checkout::CheckoutSession;
pub use points::{
    BookingResult, EarnResult, HistoryEvent, LeaderboardEntry, PointsBalance, PointsHistory,
    RedeemOutcome,
};
pub use query::{FinderParams, RecommendQuery};
