//! UI state and the events that mutate it.
//!
//! # Design Decisions
//! - State lives in one value owned by the mounted page; no globals
//! - Every mutation goes through [`UiState::apply`]
//! - `active_section` and `map_center` are stored but never read by rendering

use crate::i18n::Language;
use crate::page::content::{MapCenter, Section, MAP_CENTER, PROJECTS};
use crate::page::host::{Host, ScrollBehavior};
use crate::page::scroll::ScrollMetrics;

/// The two forms on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Contact,
    Newsletter,
}

/// User and browser events a page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    ToggleMenu,
    GoToSection(usize),
    ToggleDarkMode,
    ToggleLanguage,
    Scroll(ScrollMetrics),
    OpenProject(usize),
    SubmitForm(Form),
}

/// State of one page view.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub menu_open: bool,
    pub active_section: Section,
    pub scroll_progress: f64,
    pub dark_mode: bool,
    pub language: Language,
    pub map_center: MapCenter,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_section: Section::Home,
            scroll_progress: 0.0,
            dark_mode: false,
            language: Language::En,
            map_center: MAP_CENTER,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Make `index` the active section and scroll to it.
    ///
    /// An unknown index or a missing element leaves the viewport where it is.
    pub fn go_to_section(&mut self, index: usize, host: &mut dyn Host) {
        let Some(section) = Section::from_index(index) else {
            tracing::debug!(index, "Ignoring navigation to unknown section");
            return;
        };
        self.active_section = section;
        if let Err(e) = host.scroll_into_view(section.id(), ScrollBehavior::Smooth) {
            tracing::debug!(section = section.id(), error = %e, "Section scroll skipped");
        }
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll_progress = metrics.progress_percent();
    }

    /// Apply one event.
    pub fn apply(&mut self, event: UiEvent, host: &mut dyn Host) {
        match event {
            UiEvent::ToggleMenu => self.toggle_menu(),
            UiEvent::GoToSection(index) => self.go_to_section(index, host),
            UiEvent::ToggleDarkMode => self.toggle_dark_mode(),
            UiEvent::ToggleLanguage => self.toggle_language(),
            UiEvent::Scroll(metrics) => self.on_scroll(metrics),
            UiEvent::OpenProject(index) => match PROJECTS.get(index) {
                Some(project) => host.navigate(project.url),
                None => tracing::debug!(index, "Ignoring click on unknown project"),
            },
            // Forms have no handler; the browser's default submit applies.
            UiEvent::SubmitForm(form) => tracing::trace!(?form, "Form submitted"),
        }
    }
}
