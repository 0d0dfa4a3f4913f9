//! Application state management.

use ratatui::widgets::ListState;

use crate::theme::ThemeName;

/// Page shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Settings,
}

impl View {
    /// Returns the other page.
    pub fn toggle(self) -> View {
        match self {
            View::Dashboard => View::Settings,
            View::Settings => View::Dashboard,
        }
    }
}

/// UI-side state. Panel contents live in the binder.
#[derive(Debug, Default)]
pub struct AppState {
    pub view: View,
    /// Theme picker selection.
    pub picker: ListState,
    /// First visible line of the CPU panel; clamped when rendered.
    pub cpu_scroll: usize,
    /// One-line message shown in the settings view.
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates state with the picker on the active theme.
    pub fn new(active: ThemeName) -> Self {
        Self {
            picker: ListState::default().with_selected(Some(active.index())),
            ..Self::default()
        }
    }

    /// Switches between dashboard and settings.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggle();
        self.status_message = None;
    }

    /// Theme under the picker cursor.
    pub fn selected_theme(&self) -> ThemeName {
        let index = self.picker.selected().unwrap_or(0);
        ThemeName::ALL[index.min(ThemeName::ALL.len() - 1)]
    }

    /// Moves the picker cursor down, wrapping around.
    pub fn select_next(&mut self) {
        let next = (self.selected_theme().index() + 1) % ThemeName::ALL.len();
        self.picker.select(Some(next));
    }

    /// Moves the picker cursor up, wrapping around.
    pub fn select_prev(&mut self) {
        let len = ThemeName::ALL.len();
        let prev = (self.selected_theme().index() + len - 1) % len;
        self.picker.select(Some(prev));
    }

    /// Scrolls the CPU panel by `delta` lines.
    pub fn scroll_cpu(&mut self, delta: isize) {
        self.cpu_scroll = self.cpu_scroll.saturating_add_signed(delta);
    }

    /// Scrolls the CPU panel back to the top.
    pub fn scroll_cpu_home(&mut self) {
        self.cpu_scroll = 0;
    }
}
