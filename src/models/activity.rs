// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity records returned by the family API's `/recommend` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Activity identifier.
///
/// The upstream dataset is a CSV export, so the same column can arrive as
/// a JSON number or a JSON string depending on how it was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(untagged)]
pub enum ActivityId {
    Number(#[cfg_attr(feature = "binding-generation", ts(type = "number"))] i64),
    Text(String),
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityId::Number(n) => write!(f, "{}", n),
            ActivityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ActivityId {
    fn from(raw: &str) -> Self {
        ActivityId::Text(raw.to_string())
    }
}

/// A recommended family activity.
///
/// Every field except `name` is optional; unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Category (park, museum, ...)
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    /// Two-letter state code
    #[serde(default)]
    pub state: Option<String>,
    /// "indoor" or "outdoor" as reported by the dataset
    #[serde(default)]
    pub indoor_or_outdoor: Option<String>,
    /// Identifier used for booking
    #[serde(default)]
    pub id: Option<ActivityId>,
}

impl Activity {
    /// Identifier to book this activity with.
    ///
    /// Falls back to the activity's position in the rendered list when the
    /// dataset row carries no id.
    pub fn booking_id(&self, index: usize) -> ActivityId {
        self.id
            .clone()
            .unwrap_or(ActivityId::Number(index as i64))
    }
}

/// Indoor/outdoor filter accepted by `/recommend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Indoor,
    Outdoor,
}

impl Setting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Setting::Indoor => "indoor",
            Setting::Outdoor => "outdoor",
        }
    }

    /// Parse a form value. `Any` (or empty) means no filter.
    pub fn parse_choice(raw: &str) -> Result<Option<Self>, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(None),
            "indoor" => Ok(Some(Setting::Indoor)),
            "outdoor" => Ok(Some(Setting::Outdoor)),
            other => Err(format!(
                "Invalid 'indoor' parameter '{}': expected Any, indoor or outdoor",
                other
            )),
        }
    }
}
