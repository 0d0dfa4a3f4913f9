//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info, warn};

use crate::collector::Platform;
use crate::host::HostSnapshot;
use crate::sampler::Sampler;
use crate::scheduler::Scheduler;
use crate::theme::{ActiveTheme, ThemeName};

use super::binder::PanelBinder;
use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// How often the input thread checks its stop flag.
const INPUT_POLL: Duration = Duration::from_millis(250);

/// Main TUI application.
pub struct App<P: Platform + 'static> {
    sampler: Sampler<P>,
    theme: Arc<ActiveTheme>,
    state: AppState,
}

impl<P: Platform + 'static> App<P> {
    /// Creates a new App sampling `platform`.
    pub fn new(platform: P, theme: Arc<ActiveTheme>) -> Self {
        let state = AppState::new(theme.name());
        Self {
            sampler: Sampler::new(platform),
            theme,
            state,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, refresh: Duration) -> io::Result<()> {
        let host = Arc::new(self.sampler.host_snapshot());

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, host, refresh);

        // Restore terminal even if the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(
        self,
        terminal: &mut Terminal<B>,
        host: Arc<HostSnapshot>,
        refresh: Duration,
    ) -> io::Result<()> {
        let Self {
            sampler,
            theme,
            mut state,
        } = self;

        let events = EventHandler::new(INPUT_POLL)?;
        let tx = events.sender();
        let scheduler = Scheduler::spawn(
            sampler,
            host,
            Arc::clone(&theme),
            refresh,
            move |panels| tx.send(Event::Refresh(Box::new(panels))).is_ok(),
        )?;
        let mut binder = PanelBinder::new(theme.current());

        loop {
            terminal.draw(|frame| render(frame, &mut state, &binder, theme.current()))?;

            match events.next() {
                Ok(Event::Refresh(panels)) => binder.apply(*panels),
                Ok(Event::Key(key)) => match handle_key(&mut state, key) {
                    KeyAction::Quit => break,
                    KeyAction::SelectTheme(name) => {
                        select_theme(&theme, name, &mut state);
                        scheduler.refresh_now();
                    }
                    KeyAction::None => {}
                },
                Ok(Event::Resize(width, height)) => {
                    debug!("Terminal resized to {}x{}", width, height);
                }
                Err(_) => break,
            }
        }

        info!("Shutting down after {} refreshes", binder.applied());
        drop(scheduler);
        Ok(())
    }
}

/// Activates `name` and reports the outcome in the settings view.
fn select_theme(theme: &ActiveTheme, name: ThemeName, state: &mut AppState) {
    state.status_message = Some(match theme.activate(name.as_str()) {
        Ok(applied) => format!("Theme '{}' applied", applied.name),
        Err(e) => {
            warn!("Theme selection failed: {}", e);
            e.to_string()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_theme_updates_active_and_status() {
        let theme = ActiveTheme::default();
        let mut state = AppState::new(theme.name());

        select_theme(&theme, ThemeName::Gruvbox, &mut state);
        assert_eq!(theme.name(), ThemeName::Gruvbox);
        assert_eq!(
            state.status_message.as_deref(),
            Some("Theme 'gruvbox' applied")
        );
    }

    #[test]
    fn test_new_app_picker_on_active_theme() {
        let theme = Arc::new(ActiveTheme::new(ThemeName::Dracula));
        let app = App::new(crate::collector::MockPlatform::typical_system(), theme);
        assert_eq!(app.state.selected_theme(), ThemeName::Dracula);
    }
}
