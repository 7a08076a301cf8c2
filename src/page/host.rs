//! The environment a mounted page drives: scrolling and navigation.

use thiserror::Error;

/// How the viewport moves to a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Errors a host can report for a navigation request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no element with id `{0}`")]
    ElementNotFound(String),
}

/// Browser-side capabilities the page needs.
pub trait Host {
    /// Scroll the viewport so the element with `id` is visible.
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior)
        -> Result<(), NavigationError>;

    /// Replace the current document with `url` (full navigation).
    fn navigate(&mut self, url: &str);
}

/// Host that records requests instead of performing them.
///
/// Serves server-side rendering, where no viewport exists, and tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Element ids present in the document. Empty means every id resolves.
    pub known_ids: Vec<String>,
    pub scrolled_to: Vec<(String, ScrollBehavior)>,
    pub navigations: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose document contains only the given ids.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Host for RecordingHost {
    fn scroll_into_view(
        &mut self,
        id: &str,
        behavior: ScrollBehavior,
    ) -> Result<(), NavigationError> {
        if !self.known_ids.is_empty() && !self.known_ids.iter().any(|k| k == id) {
            return Err(NavigationError::ElementNotFound(id.to_string()));
        }
        self.scrolled_to.push((id.to_string(), behavior));
        Ok(())
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}
