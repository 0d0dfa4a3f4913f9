//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::panels::PanelId;
use crate::theme::Theme;

use super::binder::PanelBinder;
use super::state::{AppState, View};
use super::style::Styles;
use super::widgets::{render_footer, render_panel, render_settings};

/// Height of the disk panel row.
const DISK_HEIGHT: u16 = 10;

/// Main render function.
///
/// The dashboard is drawn entirely in the binder's theme, so panel text and
/// chrome always come from the same palette. The settings view follows the
/// active theme directly.
pub fn render(frame: &mut Frame, state: &mut AppState, binder: &PanelBinder, active: &Theme) {
    let theme = match state.view {
        View::Dashboard => binder.theme(),
        View::Settings => active,
    };

    let chunks = Layout::vertical([
        Constraint::Min(0),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(frame.area());

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::dashboard(theme))
        .style(Styles::dashboard(theme));
    let body = outer.inner(chunks[0]);
    frame.render_widget(outer, chunks[0]);

    match state.view {
        View::Dashboard => render_dashboard(frame, body, state, binder),
        View::Settings => render_settings(frame, body, state, theme),
    }

    render_footer(frame, chunks[1], binder, state.view, theme);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &mut AppState, binder: &PanelBinder) {
    // Info on the left, CPU/Memory/Temperature stacked on the right, Disk below.
    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(DISK_HEIGHT)]).split(area);
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);
    let right = Layout::vertical([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(columns[1]);

    render_panel(frame, columns[0], binder.target(PanelId::Info), None);
    render_panel(
        frame,
        right[0],
        binder.target(PanelId::Cpu),
        Some(&mut state.cpu_scroll),
    );
    render_panel(frame, right[1], binder.target(PanelId::Memory), None);
    render_panel(frame, right[2], binder.target(PanelId::Temperature), None);
    render_panel(frame, rows[1], binder.target(PanelId::Disk), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{MetricSample, MockPlatform};
    use crate::host::HostSnapshot;
    use crate::panels::PanelSet;
    use crate::theme::ThemeName;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn binder() -> PanelBinder {
        let mut platform = MockPlatform::typical_system();
        let host = HostSnapshot::collect(&mut platform);
        let sample = MetricSample::collect(&mut platform);
        let mut binder = PanelBinder::new(ThemeName::Default.theme());
        binder.apply(PanelSet::render(&sample, &host, ThemeName::Default.theme()));
        binder
    }

    #[test]
    fn dashboard_shows_all_panels() {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        let binder = binder();
        let mut state = AppState::new(ThemeName::Default);
        let theme = ThemeName::Default.theme();

        terminal
            .draw(|frame| render(frame, &mut state, &binder, theme))
            .unwrap();
        let screen = screen(&terminal);
        for id in PanelId::ALL {
            assert!(screen.contains(id.title()), "missing {}", id.title());
        }
        assert!(screen.contains("Total Memory: 16.00 GiB"));
        assert!(screen.contains("theme: default"));
        assert!(screen.contains("updated "));
    }

    #[test]
    fn settings_lists_themes() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let binder = binder();
        let mut state = AppState::new(ThemeName::Nord);
        state.view = View::Settings;
        state.status_message = Some("Theme 'nord' applied".to_string());
        let theme = ThemeName::Nord.theme();

        terminal
            .draw(|frame| render(frame, &mut state, &binder, theme))
            .unwrap();
        let screen = screen(&terminal);
        for name in ThemeName::ALL {
            assert!(screen.contains(name.as_str()));
        }
        assert!(screen.contains("nord (active)"));
        assert!(screen.contains("Theme 'nord' applied"));
        assert!(screen.contains("theme: nord"));
    }

    #[test]
    fn dashboard_uses_binder_theme_until_panels_arrive() {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        let binder = binder();
        let mut state = AppState::new(ThemeName::Default);

        // Theme already switched, but panels rendered with it have not arrived.
        let theme = ThemeName::Dracula.theme();
        terminal
            .draw(|frame| render(frame, &mut state, &binder, theme))
            .unwrap();
        assert!(screen(&terminal).contains("theme: default"));
    }
}
