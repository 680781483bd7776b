// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Keyword-based parsing of free-text requests such as
//! "cheap indoor museums in new york" into recommendation filters.

use crate::error::Result;
use crate::models::{RecommendQuery, Setting};
use serde::Serialize;

/// State used when the text names none.
pub const DEFAULT_STATE: &str = "CA";

/// Results requested for a chat-style query.
pub const CHAT_LIMIT: u32 = 5;

/// State names recognised in free text, checked in this order.
const STATES: &[(&str, &str)] = &[
    ("california", "CA"),
    ("texas", "TX"),
    ("florida", "FL"),
    ("new york", "NY"),
    ("arizona", "AZ"),
    ("ohio", "OH"),
    ("georgia", "GA"),
    ("illinois", "IL"),
];

const CATEGORIES: &[&str] = &["park", "museum", "library", "zoo", "restaurant", "aquarium"];

/// Filters extracted from a free-text request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    pub state: String,
    pub indoor: Option<Setting>,
    /// "free", "$" or "$$$"
    pub price: Option<String>,
    pub category: Option<String>,
}

impl SearchFilters {
    /// Recommendation query for these filters.
    ///
    /// Price and category are informational only; `/recommend` filters by
    /// state and setting.
    pub fn to_recommend_query(&self, limit: u32) -> Result<RecommendQuery> {
        RecommendQuery::new(&self.state, limit, self.indoor)
    }
}

/// Parse a free-text request into filters.
pub fn parse_query(text: &str) -> SearchFilters {
    let text = text.to_lowercase();

    let indoor = if text.contains("indoor") {
        Some(Setting::Indoor)
    } else if text.contains("outdoor") {
        Some(Setting::Outdoor)
    } else {
        None
    };

    let price = if text.contains("free") {
        Some("free")
    } else if text.contains("cheap") || text.contains("low cost") {
        Some("$")
    } else if text.contains("expensive") || text.contains("fancy") {
        Some("$$$")
    } else {
        None
    };

    // Last mention wins.
    let category = text
        .split(|c: char| !c.is_alphanumeric())
        .filter_map(singular_category)
        .last();

    let state = STATES
        .iter()
        .find(|(name, _)| text.contains(name))
        .map(|(_, abbr)| *abbr)
        .unwrap_or(DEFAULT_STATE);

    SearchFilters {
        state: state.to_string(),
        indoor,
        price: price.map(str::to_string),
        category: category.map(str::to_string),
    }
}

/// Map a word (possibly plural) to a known category.
fn singular_category(word: &str) -> Option<&'static str> {
    let singular = if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else {
        word.strip_suffix('s').unwrap_or(word).to_string()
    };

    CATEGORIES
        .iter()
        .copied()
        .find(|category| *category == word || *category == singular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let filters = parse_query("Any cheap INDOOR museums in New York?");
        assert_eq!(
            filters,
            SearchFilters {
                state: "NY".to_string(),
                indoor: Some(Setting::Indoor),
                price: Some("$".to_string()),
                category: Some("museum".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_defaults_to_california() {
        let filters = parse_query("something fun this weekend");
        assert_eq!(filters.state, "CA");
        assert!(filters.indoor.is_none());
        assert!(filters.price.is_none());
        assert!(filters.category.is_none());
    }

    #[test]
    fn test_indoor_wins_over_outdoor() {
        let filters = parse_query("indoor or outdoor, whatever");
        assert_eq!(filters.indoor, Some(Setting::Indoor));
    }

    #[test]
    fn test_price_keywords() {
        assert_eq!(parse_query("free stuff").price.as_deref(), Some("free"));
        assert_eq!(parse_query("low cost zoo").price.as_deref(), Some("$"));
        assert_eq!(parse_query("a fancy restaurant").price.as_deref(), Some("$$$"));
    }

    #[test]
    fn test_last_category_wins_and_plurals() {
        assert_eq!(
            parse_query("parks or libraries in texas").category.as_deref(),
            Some("library")
        );
        assert_eq!(
            parse_query("aquariums in florida").category.as_deref(),
            Some("aquarium")
        );
        assert!(parse_query("parking in ohio").category.is_none());
    }

    #[test]
    fn test_first_listed_state_wins() {
        assert_eq!(parse_query("texas or california").state, "CA");
    }

    #[test]
    fn test_to_recommend_query() {
        let query = parse_query("outdoor fun in georgia")
            .to_recommend_query(CHAT_LIMIT)
            .unwrap();
        assert_eq!(query.state, "GA");
        assert_eq!(query.limit, CHAT_LIMIT);
        assert_eq!(query.indoor, Some(Setting::Outdoor));
    }
}
