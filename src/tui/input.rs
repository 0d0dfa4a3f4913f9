//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, View};
use crate::theme::ThemeName;

/// Lines moved by PageUp/PageDown in the CPU panel.
const PAGE_LINES: isize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Make this theme active.
    SelectTheme(ThemeName),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char('s') => {
            state.toggle_view();
            return KeyAction::None;
        }
        _ => {}
    }
    match state.view {
        View::Dashboard => handle_dashboard(state, key),
        View::Settings => handle_settings(state, key),
    }
}

fn handle_dashboard(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.scroll_cpu(-1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_cpu(1),
        KeyCode::PageUp => state.scroll_cpu(-PAGE_LINES),
        KeyCode::PageDown => state.scroll_cpu(PAGE_LINES),
        KeyCode::Home => state.scroll_cpu_home(),
        _ => {}
    }
    KeyAction::None
}

fn handle_settings(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.toggle_view();
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            KeyAction::None
        }
        KeyCode::Enter => KeyAction::SelectTheme(state.selected_theme()),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_from_any_view() {
        let mut state = AppState::new(ThemeName::Default);
        let q = key(KeyCode::Char('q'));
        assert_eq!(handle_key(&mut state, q), KeyAction::Quit);

        state.view = View::Settings;
        assert_eq!(handle_key(&mut state, q), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn s_toggles_views() {
        let mut state = AppState::new(ThemeName::Default);
        handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.view, View::Settings);
        handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.view, View::Dashboard);
    }

    #[test]
    fn esc_returns_to_dashboard_only_from_settings() {
        let mut state = AppState::new(ThemeName::Default);
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.view, View::Dashboard);

        state.view = View::Settings;
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.view, View::Dashboard);
    }

    #[test]
    fn enter_selects_highlighted_theme() {
        let mut state = AppState::new(ThemeName::Default);
        state.view = View::Settings;

        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            KeyAction::SelectTheme(ThemeName::Gruvbox)
        );

        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            KeyAction::SelectTheme(ThemeName::Nord)
        );
    }

    #[test]
    fn enter_on_dashboard_does_nothing() {
        let mut state = AppState::new(ThemeName::Default);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::None);
    }

    #[test]
    fn dashboard_keys_scroll_cpu_panel() {
        let mut state = AppState::new(ThemeName::Default);
        handle_key(&mut state, key(KeyCode::PageDown));
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cpu_scroll, 11);
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.cpu_scroll, 10);
        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.cpu_scroll, 0);
    }

    #[test]
    fn settings_navigation_does_not_scroll() {
        let mut state = AppState::new(ThemeName::Default);
        state.view = View::Settings;
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cpu_scroll, 0);
        assert_eq!(state.selected_theme(), ThemeName::Nord);
    }
}
