// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities finder widget: search form plus one card per result.

use super::{escape, notice, or_not_available, page};
use crate::models::query::MAX_LIMIT;
use crate::models::{Activity, RecommendQuery, Setting};
use crate::services::dashboard::Section;

/// Values shown in the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderForm {
    pub state: String,
    pub indoor: Option<Setting>,
    pub limit: u32,
}

impl FinderForm {
    /// Form prefilled with the submitted query, or with defaults.
    pub fn new(query: Option<&RecommendQuery>, default_state: &str, default_limit: u32) -> Self {
        match query {
            Some(q) => Self {
                state: q.state.clone(),
                indoor: q.indoor,
                limit: q.limit,
            },
            None => Self {
                state: default_state.to_string(),
                indoor: None,
                limit: default_limit,
            },
        }
    }
}

pub struct FinderView<'a> {
    pub form: &'a FinderForm,
    /// `None` until the user has searched
    pub results: Option<&'a Section<Vec<Activity>>>,
}

/// Render the standalone finder page.
pub fn finder_page(view: &FinderView<'_>) -> String {
    let mut body = String::from("<h2>👨‍👩‍👧 Family-Friendly Activities Finder</h2>\n");
    body.push_str(&search_form("/widgets/finder", view.form, true));

    match view.results {
        None => {}
        Some(Section::Failed(msg)) => {
            body.push_str(&notice(&format!("Error fetching data: {}", msg)));
        }
        Some(Section::Loaded(activities)) if activities.is_empty() => {
            body.push_str("<p>No results found.</p>\n");
        }
        Some(Section::Loaded(activities)) => {
            for activity in activities {
                body.push_str(&activity_card(activity));
            }
        }
    }

    page("Family-Friendly Activities Finder", &body)
}

/// GET form that submits `state`, `indoor` and (optionally) `limit`.
pub(crate) fn search_form(action: &str, form: &FinderForm, with_filters: bool) -> String {
    let mut html = format!(
        "<form method=\"get\" action=\"{}\">\n\
         <label>State <input name=\"state\" value=\"{}\" maxlength=\"2\" size=\"3\"></label>\n",
        escape(action),
        escape(&form.state)
    );

    if with_filters {
        html.push_str("<label>Indoor or Outdoor? <select name=\"indoor\">\n");
        for (value, selected) in [
            ("Any", form.indoor.is_none()),
            ("indoor", form.indoor == Some(Setting::Indoor)),
            ("outdoor", form.indoor == Some(Setting::Outdoor)),
        ] {
            html.push_str(&format!(
                "<option value=\"{0}\"{1}>{0}</option>\n",
                value,
                if selected { " selected" } else { "" }
            ));
        }
        html.push_str("</select></label>\n");
        html.push_str(&format!(
            "<label>Results <input type=\"number\" name=\"limit\" min=\"1\" max=\"{}\" value=\"{}\"></label>\n",
            MAX_LIMIT, form.limit
        ));
    }

    html.push_str("<button type=\"submit\">Find Activities</button>\n</form>\n");
    html
}

fn activity_card(activity: &Activity) -> String {
    format!(
        "<div class=\"card\">\n<h4>{}</h4>\n<p>Type: {}</p>\n<p>State: {}</p>\n<p>Indoor/Outdoor: {}</p>\n</div>\n",
        escape(&activity.name),
        escape(or_not_available(activity.activity_type.as_deref())),
        escape(or_not_available(activity.state.as_deref())),
        escape(or_not_available(activity.indoor_or_outdoor.as_deref())),
    )
}
