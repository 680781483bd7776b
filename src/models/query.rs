// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommendation query forwarded to `GET /recommend`.

use crate::error::{AppError, Result};
use crate::models::Setting;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Largest `limit` a widget may ask for.
pub const MAX_LIMIT: u32 = 20;

/// Number of results requested when the caller does not say.
pub const DEFAULT_LIMIT: u32 = 5;

/// Validated query for `GET /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecommendQuery {
    /// Two-letter state code, uppercase
    #[validate(custom(function = "validate_state_code"))]
    pub state: String,
    #[validate(range(min = 1, max = MAX_LIMIT))]
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor: Option<Setting>,
}

impl RecommendQuery {
    /// Build and validate a query. The state code is uppercased.
    pub fn new(state: &str, limit: u32, indoor: Option<Setting>) -> Result<Self> {
        let query = Self {
            state: state.trim().to_ascii_uppercase(),
            limit,
            indoor,
        };
        query
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(query)
    }
}

fn validate_state_code(state: &str) -> std::result::Result<(), ValidationError> {
    if state.len() == 2 && state.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("state_code")
            .with_message("state must be a two-letter code".into()))
    }
}

/// Raw finder parameters as they arrive from a widget form or query string.
#[derive(Debug, Default, Deserialize)]
pub struct FinderParams {
    pub state: Option<String>,
    pub indoor: Option<String>,
    pub limit: Option<u32>,
}

impl FinderParams {
    /// True when the user has not submitted a search yet.
    pub fn is_empty(&self) -> bool {
        self.state.as_deref().map(str::trim).unwrap_or("").is_empty()
    }

    /// Convert into a validated query, using `default_limit` when no limit
    /// was given. Returns `None` when no state was submitted.
    pub fn to_query(&self, default_limit: u32) -> Result<Option<RecommendQuery>> {
        if self.is_empty() {
            return Ok(None);
        }

        let indoor = self
            .indoor
            .as_deref()
            .map(Setting::parse_choice)
            .transpose()
            .map_err(AppError::BadRequest)?
            .flatten();

        RecommendQuery::new(
            self.state.as_deref().unwrap_or_default(),
            self.limit.unwrap_or(default_limit),
            indoor,
        )
        .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases_state() {
        let query = RecommendQuery::new("ca", 5, None).unwrap();
        assert_eq!(query.state, "CA");
    }

    #[test]
    fn test_new_rejects_bad_state() {
        for state in ["", "C", "CAL", "1A", "C-"] {
            let err = RecommendQuery::new(state, 5, None).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "state {:?}", state);
        }
    }

    #[test]
    fn test_new_rejects_limit_out_of_range() {
        assert!(RecommendQuery::new("TX", 0, None).is_err());
        assert!(RecommendQuery::new("TX", MAX_LIMIT + 1, None).is_err());
        assert!(RecommendQuery::new("TX", MAX_LIMIT, None).is_ok());
    }

    #[test]
    fn test_finder_params_without_state_is_no_search() {
        let params = FinderParams {
            state: Some("  ".to_string()),
            indoor: Some("indoor".to_string()),
            limit: None,
        };
        assert!(params.to_query(DEFAULT_LIMIT).unwrap().is_none());
    }

    #[test]
    fn test_finder_params_any_means_no_filter() {
        let params = FinderParams {
            state: Some("fl".to_string()),
            indoor: Some("Any".to_string()),
            limit: None,
        };
        let query = params.to_query(DEFAULT_LIMIT).unwrap().unwrap();
        assert_eq!(query.state, "FL");
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert!(query.indoor.is_none());
    }

    #[test]
    fn test_finder_params_rejects_unknown_setting() {
        let params = FinderParams {
            state: Some("NY".to_string()),
            indoor: Some("underwater".to_string()),
            limit: Some(3),
        };
        assert!(matches!(
            params.to_query(DEFAULT_LIMIT),
            Err(AppError::BadRequest(_))
        ));
    }
}
