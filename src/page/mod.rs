//! Page composer subsystem.
//!
//! # Data Flow
//! ```text
//! mount()
//!     → UiState::default() + scroll listener registered
//!
//! user/browser event
//!     → UiEvent
//!     → state.rs (apply: mutate state, ask Host to scroll/navigate)
//!     → render.rs (state → HTML)
//!
//! unmount()
//!     → scroll listener dropped
//! ```
//!
//! # Design Decisions
//! - One-way cycle: events mutate state, rendering only reads it
//! - Rendering has no side effects and no external inputs
//! - Browser capabilities sit behind the `Host` trait

pub mod content;
pub mod host;
pub mod render;
pub mod scroll;
pub mod state;

pub use host::{Host, NavigationError, RecordingHost, ScrollBehavior};
pub use render::render_page;
pub use scroll::{ScrollEvents, ScrollListener, ScrollMetrics};
pub use state::{Form, UiEvent, UiState};

/// A page attached to a scroll event source.
#[derive(Debug)]
pub struct MountedPage {
    state: UiState,
    scroll: ScrollListener,
}

impl MountedPage {
    /// Mount a fresh page, registering its scroll listener.
    pub fn mount(events: &ScrollEvents) -> Self {
        tracing::debug!("Page mounted");
        Self {
            state: UiState::default(),
            scroll: events.subscribe(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Apply one user event.
    pub fn dispatch(&mut self, event: UiEvent, host: &mut dyn Host) {
        self.state.apply(event, host);
    }

    /// Apply pending scroll events. Returns true if the progress was updated.
    pub fn poll_scroll(&mut self) -> bool {
        match self.scroll.latest() {
            Some(metrics) => {
                self.state.on_scroll(metrics);
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        render_page(&self.state)
    }

    /// Detach from the event source. The scroll listener is released.
    pub fn unmount(self) -> UiState {
        tracing::debug!("Page unmounted");
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_mount_registers_and_unmount_releases_listener() {
        let events = ScrollEvents::default();
        let page = MountedPage::mount(&events);
        assert_eq!(events.listener_count(), 1);

        let second = MountedPage::mount(&events);
        assert_eq!(events.listener_count(), 2);

        page.unmount();
        drop(second);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_scroll_events_reach_mounted_page() {
        let events = ScrollEvents::default();
        let mut page = MountedPage::mount(&events);
        assert!(!page.poll_scroll());

        events.emit(ScrollMetrics::new(100.0, 1200.0, 1000.0));
        events.emit(ScrollMetrics::new(200.0, 1200.0, 1000.0));
        assert!(page.poll_scroll());
        assert_eq!(page.state().scroll_progress, 100.0);
    }

    #[test]
    fn test_language_scenario() {
        let events = ScrollEvents::default();
        let mut host = RecordingHost::new();
        let mut page = MountedPage::mount(&events);

        let initial = page.render();
        assert!(initial.contains("Welcome to My Portfolio"));
        assert!(initial.contains("Toshiki Sakuta"));

        page.dispatch(UiEvent::ToggleLanguage, &mut host);
        assert_eq!(page.state().language, Language::Ja);
        assert!(page.render().contains("私の世界へようこそ"));
    }

    #[test]
    fn test_project_click_scenario() {
        let events = ScrollEvents::default();
        let mut host = RecordingHost::new();
        let mut page = MountedPage::mount(&events);

        let index = content::PROJECTS
            .iter()
            .position(|p| p.title == "Cloud Solutions")
            .unwrap();
        page.dispatch(UiEvent::OpenProject(index), &mut host);
        assert_eq!(host.navigations, vec!["/cloud-solutions".to_string()]);
    }
}
