//! Page and health handlers.

use axum::{
    extract::RawQuery,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use url::form_urlencoded;

use crate::i18n::Language;
use crate::observability::metrics;
use crate::page::{content::Section, render_page, UiState};

/// Query parameters carrying the UI state of a page view.
///
/// Parsing is lenient: unknown keys (such as fields of the inert forms,
/// which submit to the page itself) are ignored, a repeated key keeps its
/// last value and bad values fall back to the initial state.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub dark: Option<String>,
    pub menu: Option<String>,
    pub section: Option<String>,
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true" | "1" | "on"))
}

impl PageQuery {
    /// Parse a raw (still percent-encoded) query string.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "lang" => &mut parsed.lang,
                "dark" => &mut parsed.dark,
                "menu" => &mut parsed.menu,
                "section" => &mut parsed.section,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        parsed
    }

    /// UI state described by the query.
    pub fn into_state(self) -> UiState {
        let mut state = UiState::new();
        if self.lang.as_deref() == Some("ja") {
            state.language = Language::Ja;
        }
        state.dark_mode = parse_flag(self.dark.as_deref());
        state.menu_open = parse_flag(self.menu.as_deref());
        if let Some(section) = self
            .section
            .and_then(|s| s.parse::<usize>().ok())
            .and_then(Section::from_index)
        {
            state.active_section = section;
        }
        state
    }
}

/// `GET /`: render the page.
pub async fn page_handler(RawQuery(query): RawQuery) -> Response {
    let start = Instant::now();
    let state = PageQuery::parse(query.as_deref().unwrap_or_default()).into_state();

    tracing::debug!(
        language = %state.language,
        dark_mode = state.dark_mode,
        menu_open = state.menu_open,
        "Rendering page"
    );

    let mut response = Html(render_page(&state)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    metrics::record_request("page", StatusCode::OK.as_u16(), start);
    response
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
}

/// `GET /health`: liveness.
pub async fn health_handler() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lang: Option<&str>, dark: Option<&str>, menu: Option<&str>) -> PageQuery {
        PageQuery {
            lang: lang.map(String::from),
            dark: dark.map(String::from),
            menu: menu.map(String::from),
            section: None,
        }
    }

    #[test]
    fn test_empty_query_is_initial_state() {
        assert_eq!(PageQuery::default().into_state(), UiState::new());
    }

    #[test]
    fn test_query_sets_state() {
        let state = query(Some("ja"), Some("true"), Some("1")).into_state();
        assert_eq!(state.language, Language::Ja);
        assert!(state.dark_mode);
        assert!(state.menu_open);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let state = PageQuery {
            section: Some("9".into()),
            ..query(Some("fr"), Some("maybe"), None)
        }
        .into_state();
        assert_eq!(state, UiState::new());
    }

    #[test]
    fn test_parse_last_value_wins() {
        let parsed = PageQuery::parse("lang=en&lang=ja&menu=true&menu=false&name=a&name=b");
        assert_eq!(parsed.lang.as_deref(), Some("ja"));
        assert_eq!(parsed.menu.as_deref(), Some("false"));
        assert_eq!(parsed.dark, None);
    }

    #[test]
    fn test_parse_decodes_and_tolerates_junk() {
        let parsed = PageQuery::parse("dark=%74rue&&=x&section&lang");
        assert_eq!(parsed.dark.as_deref(), Some("true"));
        assert_eq!(parsed.section.as_deref(), Some(""));
        assert_eq!(parsed.lang.as_deref(), Some(""));
        assert_eq!(PageQuery::parse(""), PageQuery::default());
    }

    #[test]
    fn test_section_is_stored() {
        let state = PageQuery {
            section: Some("2".into()),
            ..PageQuery::default()
        }
        .into_state();
        assert_eq!(state.active_section, Section::Projects);
    }
}
