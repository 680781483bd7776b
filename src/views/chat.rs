// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text replies for chat integrations.

use crate::models::Activity;

/// Reply text for a list of recommendations.
pub fn chat_reply(results: &[Activity]) -> String {
    if results.is_empty() {
        return "Here are family-friendly activities:\nSorry, I couldn’t find anything.".to_string();
    }

    let lines: Vec<String> = results
        .iter()
        .map(|a| format!("• {} ({})", a.name, a.activity_type.as_deref().unwrap_or("")))
        .collect();

    format!("Here are family-friendly activities:\n{}", lines.join("\n"))
}
